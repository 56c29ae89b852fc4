use bon::Builder;
use futures::{StreamExt, stream};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::{
    geo::GeoLocation,
    nearby::{error::Error, poi::PointOfInterest, resolver::NearbyResolver},
    prelude::*,
};

pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Event venue as supplied by the caller.
#[must_use]
#[derive(Builder, Clone, Debug, Deserialize, Serialize)]
pub struct Venue {
    #[builder(into)]
    pub name: String,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(flatten)]
    pub location: GeoLocation,
}

/// Per-venue outcome of a sweep.
///
/// One venue's upstream failure must not discard the other venues' results,
/// so the failure rides along instead of propagating.
#[must_use]
pub struct VenueNearby {
    pub venue: Venue,
    pub outcome: Result<Vec<PointOfInterest>, Error>,
}

impl Serialize for VenueNearby {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VenueNearby", 2)?;
        state.serialize_field("venue", &self.venue)?;
        match &self.outcome {
            Ok(places) => state.serialize_field("places", places)?,
            Err(error) => state.serialize_field("error", &error.to_string())?,
        }
        state.end()
    }
}

/// Resolves nearby places for a batch of venues.
#[must_use]
#[derive(Builder)]
pub struct VenueSweep {
    resolver: NearbyResolver,

    radius_meters: f64,

    /// Cap on simultaneous provider requests.
    #[builder(default = DEFAULT_MAX_IN_FLIGHT)]
    max_in_flight: usize,
}

impl VenueSweep {
    /// Resolve every venue, preserving the input order.
    pub async fn run(&self, venues: Vec<Venue>) -> Vec<VenueNearby> {
        info!(n_venues = venues.len(), self.max_in_flight, "Sweeping…");
        stream::iter(venues)
            .map(|venue| self.resolve(venue))
            .buffered(self.max_in_flight.max(1))
            .collect()
            .await
    }

    #[instrument(skip_all, fields(venue = %venue.name))]
    async fn resolve(&self, venue: Venue) -> VenueNearby {
        let outcome = self.resolver.find_nearby(venue.location, self.radius_meters).await;
        if let Err(error) = &outcome {
            error!("‼️ Failed to resolve places near {}: {error:#}", venue.name);
        }
        VenueNearby { venue, outcome }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{client::build_client, mapbox::MapboxClient};

    #[tokio::test]
    async fn per_venue_isolation_ok() -> Result {
        let resolver =
            NearbyResolver::builder().mapbox(MapboxClient(build_client()?)).build();
        let sweep = VenueSweep::builder().resolver(resolver).radius_meters(1000.0).build();
        let report = sweep
            .run(vec![venue("Teatro Colón", 4.5964, -74.0760), venue("Movistar Arena", 4.6492, -74.0777)])
            .await;
        assert_eq!(
            report.iter().map(|entry| entry.venue.name.as_str()).collect_vec(),
            ["Teatro Colón", "Movistar Arena"],
        );
        for entry in &report {
            // the token is not configured, so every venue reports its own failure
            assert!(matches!(entry.outcome, Err(Error::MissingAccessToken)));
        }
        Ok(())
    }

    #[test]
    fn report_serialization_ok() -> Result {
        let location = GeoLocation::builder().latitude(4.6098).longitude(-74.0819).build();
        let success = VenueNearby {
            venue: venue("Teatro Colón", 4.5964, -74.0760),
            outcome: Ok(vec![
                PointOfInterest::builder()
                    .name("Museo Botero")
                    .category("museum")
                    .distance(24.0)
                    .location(location)
                    .build(),
            ]),
        };
        assert_eq!(
            serde_json::to_string(&success)?,
            // language=json
            r#"{"venue":{"name":"Teatro Colón","latitude":4.5964,"longitude":-74.076},"places":[{"name":"Museo Botero","category":"museum","distance":24.0,"latitude":4.6098,"longitude":-74.0819}]}"#,
        );
        let failure = VenueNearby {
            venue: venue("Teatro Colón", 4.5964, -74.0760),
            outcome: Err(Error::MissingAccessToken),
        };
        assert_eq!(
            serde_json::to_string(&failure)?,
            // language=json
            r#"{"venue":{"name":"Teatro Colón","latitude":4.5964,"longitude":-74.076},"error":"geocoding access token is not configured"}"#,
        );
        Ok(())
    }

    #[test]
    fn venue_from_json_ok() -> Result {
        // language=json
        let venue: Venue = serde_json::from_str(
            r#"{"name": "Teatro Colón", "address": "Calle 10 # 5-32", "latitude": 4.5964, "longitude": -74.0760}"#,
        )?;
        assert_eq!(venue.name, "Teatro Colón");
        assert_eq!(venue.address.as_deref(), Some("Calle 10 # 5-32"));
        assert_eq!(venue.location.latitude, 4.5964);
        Ok(())
    }

    fn venue(name: &str, latitude: f64, longitude: f64) -> Venue {
        Venue::builder()
            .name(name)
            .location(GeoLocation::builder().latitude(latitude).longitude(longitude).build())
            .build()
    }
}
