//! Nearby points-of-interest resolution.

mod error;
mod poi;
mod resolver;
mod sweep;

pub use self::{
    error::Error as NearbyError,
    poi::PointOfInterest,
    resolver::NearbyResolver,
    sweep::{Venue, VenueNearby, VenueSweep},
};
