//! HTTP client for the word-catalog backend.
//!
//! The engine needs the catalog exactly once, at session start. Fetching is
//! blocking and never retried here; retries and redirects-to-elsewhere belong
//! to the caller.

use crate::words::WordEntry;
use std::fmt;

/// Default backend address, overridable via `ECOLEXICO_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Why a catalog fetch failed. Every variant is fatal to session start.
#[derive(Debug)]
pub enum CatalogError {
    /// Transport failure or non-success status from the backend.
    Network(String),
    /// The response body was not a word list.
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "could not reach the word catalog: {}", msg),
            CatalogError::Decode(msg) => write!(f, "unexpected catalog response: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Client for the backend REST API.
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Build a client from `ECOLEXICO_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        let url =
            std::env::var("ECOLEXICO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    /// Fetch the full word catalog (`GET /api/words`).
    pub fn fetch_words(&self) -> Result<Vec<WordEntry>, CatalogError> {
        self.fetch(&self.words_url(None))
    }

    /// Fetch one region's words (`GET /api/words?region_id=N`).
    pub fn fetch_words_by_region(&self, region_id: u32) -> Result<Vec<WordEntry>, CatalogError> {
        self.fetch(&self.words_url(Some(region_id)))
    }

    fn words_url(&self, region_id: Option<u32>) -> String {
        match region_id {
            Some(region_id) => format!("{}/api/words?region_id={}", self.base_url, region_id),
            None => format!("{}/api/words", self.base_url),
        }
    }

    fn fetch(&self, url: &str) -> Result<Vec<WordEntry>, CatalogError> {
        let response = ureq::get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        response
            .into_json()
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
