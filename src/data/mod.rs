//! External data providers.
//!
//! Both providers sit behind a trait so the pipeline can run against
//! in-memory fixtures. Neither trait lets a provider failure escape a run:
//! callers get a `SourceError` and decide on the fallback.

pub mod cat;
pub mod yahoo;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::warn;

use crate::domain::PriceSample;
use crate::error::{AppError, SourceError};

pub use cat::CatApiClient;
pub use yahoo::YahooClient;

/// Shown instead of a picture when the image provider fails.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400?text=Cat+Image+Error";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Daily close history for a symbol.
pub trait QuoteSource {
    /// Closes covering the last `lookback_days` calendar days, oldest first,
    /// with gaps already forward-filled.
    fn fetch(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceSample>, SourceError>;
}

/// A source of one decorative image URL.
pub trait ImageProvider {
    /// `mood_hint` is advisory; providers may ignore it.
    fn try_fetch(&self, mood_hint: &str) -> Result<String, SourceError>;

    /// Like `try_fetch`, but never fails: errors become the placeholder.
    fn fetch_image_url(&self, mood_hint: &str) -> String {
        match self.try_fetch(mood_hint) {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "image fetch failed, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

/// Blocking HTTP client shared by the providers.
pub(crate) fn http_client() -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::new(4, format!("Failed to create HTTP client: {e}")))
}
