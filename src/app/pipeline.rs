//! The report pipeline shared by `update` and `preview`.
//!
//! quotes (per instrument) -> change -> mood -> image -> render
//!
//! Writing the document is left to the caller so `preview` can print it.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{info, warn};

use crate::data::{CatApiClient, ImageProvider, QuoteSource, YahooClient};
use crate::domain::{ChangeResult, Instrument, InstrumentQuote, MarketMood, RunConfig};
use crate::error::AppError;
use crate::math::compute;
use crate::mood::classify;
use crate::report::render;

/// Everything a single run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub quotes: Vec<InstrumentQuote>,
    pub mood: MarketMood,
    pub image_url: String,
    pub generated_at: DateTime<FixedOffset>,
    pub document: String,
}

impl RunOutput {
    /// Instruments whose provider call failed.
    pub fn failures(&self) -> impl Iterator<Item = &InstrumentQuote> {
        self.quotes.iter().filter(|q| q.failure.is_some())
    }
}

/// Run the pipeline against the live providers.
pub fn run_report(config: &RunConfig) -> Result<RunOutput, AppError> {
    let source = YahooClient::new()?;
    let images = CatApiClient::new()?;
    let generated_at = report_time(config, Utc::now())?;

    Ok(run_report_with(config, &source, &images, generated_at))
}

/// Run the pipeline with the given providers.
///
/// Never fails: provider errors degrade to flat quotes and the placeholder
/// image.
pub fn run_report_with(
    config: &RunConfig,
    source: &dyn QuoteSource,
    images: &dyn ImageProvider,
    generated_at: DateTime<FixedOffset>,
) -> RunOutput {
    let quotes: Vec<InstrumentQuote> = config
        .instruments
        .iter()
        .map(|inst| quote_instrument(source, inst, config.lookback_days))
        .collect();

    let results: Vec<ChangeResult> = quotes.iter().map(|q| q.result).collect();
    let mood = classify(&results);
    info!(good = mood.is_good, instruments = quotes.len(), "market mood classified");

    let image_url = images.fetch_image_url(mood.image_tag());

    let rows: Vec<(Instrument, ChangeResult)> = quotes
        .iter()
        .map(|q| (q.instrument.clone(), q.result))
        .collect();
    let document = render(&rows, &mood, &image_url, generated_at, &config.timezone_label);

    RunOutput {
        quotes,
        mood,
        image_url,
        generated_at,
        document,
    }
}

/// Fetch and compute one instrument; failures become a flat result.
pub fn quote_instrument(source: &dyn QuoteSource, instrument: &Instrument, lookback_days: u32) -> InstrumentQuote {
    match source.fetch(&instrument.symbol, lookback_days) {
        Ok(samples) => {
            let result = compute(&samples);
            if result.degenerate {
                warn!(
                    symbol = %instrument.symbol,
                    samples = samples.len(),
                    "not enough usable closes, reporting flat"
                );
            } else {
                info!(
                    symbol = %instrument.symbol,
                    price = result.current_price,
                    change = result.change_percent,
                    "quote computed"
                );
            }
            InstrumentQuote {
                instrument: instrument.clone(),
                result,
                failure: None,
            }
        }
        Err(err) => {
            warn!(symbol = %instrument.symbol, error = %err, "quote fetch failed, reporting flat");
            InstrumentQuote {
                instrument: instrument.clone(),
                result: ChangeResult::unavailable(),
                failure: Some(err.to_string()),
            }
        }
    }
}

/// Convert `now` into the report's configured fixed offset.
pub fn report_time(config: &RunConfig, now: DateTime<Utc>) -> Result<DateTime<FixedOffset>, AppError> {
    let offset = config
        .utc_offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError::new(2, format!("Invalid UTC offset: {} hours.", config.utc_offset_hours))
        })?;
    Ok(now.with_timezone(&offset))
}
