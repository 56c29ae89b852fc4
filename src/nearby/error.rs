use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Checked before any request leaves the process.
    #[error("geocoding access token is not configured")]
    MissingAccessToken,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("search radius {0} is not positive")]
    InvalidRadius(f64),

    #[error("provider error: {0:#}")]
    Upstream(#[from] anyhow::Error),
}
