//! Client for the Mapbox forward-geocoding API.

mod client;
mod geocoding;

pub use self::{
    client::{MapboxClient, PlacesRequest},
    geocoding::{Feature, FeatureCollection, FeatureProperties, Position},
};
