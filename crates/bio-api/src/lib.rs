//! HTTP client for the Biographica query API
//!
//! Implements [`bio_core::ProteinCatalog`] over `reqwest`. Endpoint paths
//! mirror the backend's route table; the base URL comes from the
//! `BIOGRAPHICA_API_URL` environment variable with a localhost default for
//! development.

mod client;
mod endpoints;

pub use client::ApiClient;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "BIOGRAPHICA_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Resolve the API base URL, trimming any trailing slash.
pub fn api_base_url() -> String {
    let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}
