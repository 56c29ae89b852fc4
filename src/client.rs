//! Provides the shared HTTP `Client`.

use std::time::Duration;

use clap::crate_version;
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};

use crate::prelude::*;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("geoscout / ", crate_version!())),
    );
    Client::builder()
        .gzip(true)
        .use_rustls_tls()
        .default_headers(headers)
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .context("failed to build an HTTP client")
}
