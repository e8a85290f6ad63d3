//! Shared domain types.
//!
//! Everything here lives for a single run: built from configuration or
//! provider data, consumed by the report, then dropped.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default lookback window (calendar days) requested from the quote provider.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 10;

/// Shortest lookback window that still holds two sessions when a
/// multi-day holiday joins a weekend.
pub const MIN_LOOKBACK_DAYS: u32 = 7;

/// Longest lookback window accepted; one year plus a leap day.
pub const MAX_LOOKBACK_DAYS: u32 = 366;

pub const DEFAULT_OUTPUT: &str = "README.md";
pub const DEFAULT_CURRENCY: &str = "KRW";

/// A tracked symbol and how to label it in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    pub symbol: String,
    /// Suffix for non-index prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Instrument {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// One daily close as reported by the quote provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub date: NaiveDate,
    pub close: f64,
}

/// Day-over-day change for one instrument.
///
/// `degenerate` marks results that could not be computed (too few samples,
/// zero baseline). A degenerate result always has `change_percent == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeResult {
    pub current_price: f64,
    pub change_percent: f64,
    pub degenerate: bool,
}

impl ChangeResult {
    /// Neutral result used when nothing could be computed.
    pub fn unavailable() -> Self {
        Self {
            current_price: 0.0,
            change_percent: 0.0,
            degenerate: true,
        }
    }
}

/// Pipeline record for one instrument.
#[derive(Debug, Clone)]
pub struct InstrumentQuote {
    pub instrument: Instrument,
    pub result: ChangeResult,
    /// Why the provider call failed, if it did.
    pub failure: Option<String>,
}

/// Aggregate good/bad classification of the tracked market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketMood {
    pub is_good: bool,
    pub message: String,
    pub emoji: String,
}

impl MarketMood {
    /// Tag handed to the image provider as a hint.
    pub fn image_tag(&self) -> &'static str {
        if self.is_good { "happy" } else { "sad" }
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Report rows appear in this order.
    pub instruments: Vec<Instrument>,
    pub lookback_days: u32,
    pub output: PathBuf,
    pub utc_offset_hours: i32,
    pub timezone_label: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            instruments: default_instruments(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            utc_offset_hours: 9,
            timezone_label: "KST".to_string(),
        }
    }
}

/// Instruments tracked when no config file is given.
pub fn default_instruments() -> Vec<Instrument> {
    vec![
        Instrument::new("KOSPI", "^KS11"),
        Instrument::new("KOSDAQ", "^KQ11"),
        Instrument::new("삼성전자", "005930.KS"),
        Instrument::new("비트코인", "BTC-KRW"),
    ]
}
