use bon::Builder;
use serde::Serialize;

use crate::geo::GeoLocation;

/// Named place near the reference point.
///
/// Built fresh for every lookup and handed straight to the caller, never
/// stored.
#[must_use]
#[derive(Builder, Clone, Debug, Serialize)]
pub struct PointOfInterest {
    #[builder(into)]
    pub name: String,

    /// Classification tag supplied by the provider.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Great-circle distance from the reference point, in meters.
    pub distance: f64,

    #[serde(flatten)]
    pub location: GeoLocation,
}
