//! The Cat API integration: one random picture per report.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::data::ImageProvider;
use crate::error::{AppError, SourceError};

const SEARCH_URL: &str = "https://api.thecatapi.com/v1/images/search";

pub struct CatApiClient {
    client: Client,
}

impl CatApiClient {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            client: crate::data::http_client()?,
        })
    }
}

impl ImageProvider for CatApiClient {
    fn try_fetch(&self, mood_hint: &str) -> Result<String, SourceError> {
        // The search endpoint has no mood filter; the hint is only logged.
        debug!(mood_hint, url = SEARCH_URL, "requesting image");

        let resp = self.client.get(SEARCH_URL).send()?;
        let status = resp.status();
        let body = resp.text()?;
        classify_search_response(status, &body)
    }
}

/// Map an HTTP status and search body to an image URL or a `SourceError`.
fn classify_search_response(status: StatusCode, body: &str) -> Result<String, SourceError> {
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }
    parse_search(body)
}

#[derive(Debug, Deserialize)]
struct CatImage {
    #[serde(default)]
    url: String,
}

/// Pick the first image URL out of a search response.
fn parse_search(body: &str) -> Result<String, SourceError> {
    let images: Vec<CatImage> =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    let first = images.into_iter().next().ok_or(SourceError::Empty)?;
    if first.url.trim().is_empty() {
        return Err(SourceError::Malformed("first image has no url".to_string()));
    }
    Ok(first.url)
}
