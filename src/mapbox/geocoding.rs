use serde::Deserialize;

use crate::geo::GeoLocation;

/// Subset of a geocoding [response][1] consumed by the resolver.
///
/// [1]: https://docs.mapbox.com/api/search/geocoding-v5/#geocoding-response-object
#[derive(Debug, Deserialize)]
#[must_use]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Feature {
    /// Display name of the place.
    pub text: String,

    #[serde(default)]
    pub properties: FeatureProperties,

    /// Feature center, ordered `[longitude, latitude]`.
    pub center: Position,
}

#[derive(Debug, Default, Deserialize)]
#[must_use]
pub struct FeatureProperties {
    /// Comma-separated classification tags, for example `museum`.
    #[serde(default)]
    pub category: Option<String>,
}

/// `[longitude, latitude]` pair as Mapbox returns it.
#[derive(Copy, Clone, Debug, Deserialize)]
#[must_use]
pub struct Position(pub f64, pub f64);

impl From<Position> for GeoLocation {
    fn from(position: Position) -> Self {
        Self::builder().latitude(position.1).longitude(position.0).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn feature_collection_ok() -> Result {
        // language=json
        let response = r#"{
            "type": "FeatureCollection",
            "features": [{
                "id": "poi.42",
                "text": "Museo Botero",
                "properties": {"category": "museum"},
                "center": [-74.0819, 4.6098]
            }]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(response)?;
        let feature = collection.features.first().context("no features")?;
        assert_eq!(feature.text, "Museo Botero");
        assert_eq!(feature.properties.category.as_deref(), Some("museum"));
        let location = GeoLocation::from(feature.center);
        assert_eq!(location.latitude, 4.6098);
        assert_eq!(location.longitude, -74.0819);
        Ok(())
    }

    #[test]
    fn missing_properties_ok() -> Result {
        // language=json
        let response = r#"{"features": [{"text": "Unnamed corner", "center": [4.9041, 52.3676]}]}"#;
        let collection: FeatureCollection = serde_json::from_str(response)?;
        assert_eq!(collection.features.first().context("no features")?.properties.category, None);
        Ok(())
    }

    #[test]
    fn empty_collection_ok() -> Result {
        let collection: FeatureCollection = serde_json::from_str(r#"{"type": "FeatureCollection"}"#)?;
        assert!(collection.features.is_empty());
        Ok(())
    }
}
