use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Cli {
    /// Mapbox access token used for the places requests.
    ///
    /// The resolver refuses to call out without one.
    #[clap(long, env = "MAPBOX_API_KEY")]
    pub access_token: Option<String>,

    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find points of interest near the given coordinate.
    #[clap(alias = "nearby")]
    Lookup {
        /// Latitude of the reference point, in decimal degrees.
        #[clap(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude of the reference point, in decimal degrees.
        #[clap(allow_negative_numbers = true)]
        longitude: f64,

        /// Search radius in meters.
        #[clap(long, default_value = "1000")]
        radius: f64,
    },

    /// Resolve nearby places for every venue in a JSON file.
    Sweep {
        /// Path to a JSON array of venues.
        path: PathBuf,

        /// Search radius in meters.
        #[clap(long, default_value = "1000")]
        radius: f64,

        /// Maximum number of in-flight provider requests.
        #[clap(long, default_value = "8")]
        max_in_flight: usize,
    },
}
