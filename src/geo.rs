use bon::Builder;
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the spherical distance approximation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Coordinate pair in decimal degrees (WGS 84).
#[must_use]
#[derive(Builder, Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// Great-circle distance to `other`, in meters, by the haversine formula.
    ///
    /// Spherical approximation without ellipsoidal correction. The error is a
    /// few tenths of a percent, adequate at city scale.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}
