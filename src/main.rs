//! Points-of-interest lookup around event venues.

mod cli;
mod client;
mod geo;
mod logging;
mod mapbox;
mod nearby;
mod prelude;

use std::fs;

use clap::Parser;

use crate::{
    cli::{Cli, Command},
    geo::GeoLocation,
    mapbox::MapboxClient,
    nearby::{NearbyResolver, Venue, VenueSweep},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let _guards = logging::init(cli.sentry_dsn.as_deref())?;
    let resolver = NearbyResolver::builder()
        .mapbox(MapboxClient(client::build_client()?))
        .maybe_access_token(cli.access_token)
        .build();
    match cli.command {
        Command::Lookup { latitude, longitude, radius } => {
            let reference =
                GeoLocation::builder().latitude(latitude).longitude(longitude).build();
            let places = resolver.find_nearby(reference, radius).await?;
            info!(n_places = places.len(), "Done.");
            println!("{}", serde_json::to_string_pretty(&places)?);
        }
        Command::Sweep { path, radius, max_in_flight } => {
            let venues: Vec<Venue> = {
                let venues = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                serde_json::from_str(&venues)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?
            };
            let sweep = VenueSweep::builder()
                .resolver(resolver)
                .radius_meters(radius)
                .max_in_flight(max_in_flight)
                .build();
            let report = sweep.run(venues).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
