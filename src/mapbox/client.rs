use bon::Builder;
use serde::Serialize;
use url::Url;

use crate::{geo::GeoLocation, mapbox::geocoding::FeatureCollection, prelude::*};

/// Candidate cap requested from the provider.
pub const CANDIDATE_LIMIT: u32 = 10;

/// Only points of interest are requested, never addresses or regions.
const POI_TYPES: &str = "poi";

#[must_use]
#[derive(Clone)]
pub struct MapboxClient(pub reqwest::Client);

impl MapboxClient {
    /// Forward-geocode points of interest around the request center.
    ///
    /// Issues exactly one GET request, biased toward the center. No retries.
    #[instrument(skip_all, err(level = Level::DEBUG))]
    pub async fn places(&self, request: &PlacesRequest<'_>) -> Result<FeatureCollection> {
        info!(
            latitude = request.center.latitude,
            longitude = request.center.longitude,
            limit = request.limit,
            "🌍 Querying places…",
        );
        let url = {
            let query = serde_qs::to_string(&request.query())
                .context("failed to serialize the places request")?;
            let mut url = Url::parse(&format!(
                "https://api.mapbox.com/geocoding/v5/mapbox.places/{},{}.json",
                request.center.longitude, request.center.latitude,
            ))?;
            url.set_query(Some(&query));
            url
        };
        self.0
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("failed to query places")
    }
}

#[must_use]
#[derive(Builder)]
pub struct PlacesRequest<'a> {
    pub center: GeoLocation,

    pub access_token: &'a str,

    #[builder(default = CANDIDATE_LIMIT)]
    pub limit: u32,
}

impl PlacesRequest<'_> {
    fn query(&self) -> PlacesQuery<'_> {
        PlacesQuery {
            access_token: self.access_token,
            limit: self.limit,
            types: POI_TYPES,
            proximity: format!("{},{}", self.center.longitude, self.center.latitude),
        }
    }
}

#[derive(Serialize)]
struct PlacesQuery<'a> {
    access_token: &'a str,
    limit: u32,
    types: &'a str,
    proximity: String,
}
