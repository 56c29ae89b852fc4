use bon::Builder;

use crate::{
    geo::GeoLocation,
    mapbox::{Feature, MapboxClient, PlacesRequest},
    nearby::{error::Error, poi::PointOfInterest},
    prelude::*,
};

/// Resolves points of interest within a radius of a reference coordinate.
///
/// The provider is asked for proximity-biased candidates, but its relevance
/// semantics are not an exact meter cutoff. The locally computed distance is
/// the authoritative filter. Results keep the provider order.
#[must_use]
#[derive(Builder, Clone)]
pub struct NearbyResolver {
    mapbox: MapboxClient,

    /// Checked on every lookup, before any request goes out.
    #[builder(into)]
    access_token: Option<String>,
}

impl NearbyResolver {
    /// Find points of interest within `radius_meters` of the reference point.
    #[instrument(skip(self), err(level = Level::DEBUG))]
    pub async fn find_nearby(
        &self,
        reference: GeoLocation,
        radius_meters: f64,
    ) -> Result<Vec<PointOfInterest>, Error> {
        let access_token = self
            .access_token
            .as_deref()
            .filter(|access_token| !access_token.trim().is_empty())
            .ok_or(Error::MissingAccessToken)?;
        validate(reference, radius_meters)?;
        let request = PlacesRequest::builder()
            .center(reference)
            .access_token(access_token)
            .build();
        let collection = self.mapbox.places(&request).await?;
        Ok(within_radius(reference, radius_meters, collection.features))
    }
}

fn validate(reference: GeoLocation, radius_meters: f64) -> Result<(), Error> {
    if !(-90.0..=90.0).contains(&reference.latitude) {
        return Err(Error::LatitudeOutOfRange(reference.latitude));
    }
    if !(-180.0..=180.0).contains(&reference.longitude) {
        return Err(Error::LongitudeOutOfRange(reference.longitude));
    }
    if radius_meters.is_nan() || radius_meters <= 0.0 {
        return Err(Error::InvalidRadius(radius_meters));
    }
    Ok(())
}

fn within_radius(
    reference: GeoLocation,
    radius_meters: f64,
    features: Vec<Feature>,
) -> Vec<PointOfInterest> {
    features
        .into_iter()
        .map(|feature| {
            let location = GeoLocation::from(feature.center);
            PointOfInterest::builder()
                .name(feature.text)
                .maybe_category(feature.properties.category)
                .distance(reference.distance_to(location))
                .location(location)
                .build()
        })
        .filter(|place| place.distance <= radius_meters)
        .collect()
}
