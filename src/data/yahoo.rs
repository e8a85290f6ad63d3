//! Yahoo Finance chart API integration for daily closes.

use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::data::QuoteSource;
use crate::domain::PriceSample;
use crate::error::{AppError, SourceError};
use crate::math::forward_fill;

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

pub struct YahooClient {
    client: Client,
}

impl YahooClient {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            client: crate::data::http_client()?,
        })
    }

    fn fetch_chart(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceSample>, SourceError> {
        let (start, end) = lookback_window(Utc::now(), lookback_days)?;
        let url = format!("{BASE_URL}/{}", urlencoding::encode(symbol));
        debug!(symbol, %url, lookback_days, "requesting chart");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("period1", start.timestamp().to_string()),
                ("period2", end.timestamp().to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        classify_chart_response(status, &body)
    }
}

/// `[end - lookback_days, end]`; an unrepresentable start is a malformed request.
fn lookback_window(end: DateTime<Utc>, lookback_days: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), SourceError> {
    let start = Duration::try_days(i64::from(lookback_days))
        .and_then(|span| end.checked_sub_signed(span))
        .ok_or_else(|| SourceError::Malformed(format!("lookback of {lookback_days} days is out of range")))?;
    Ok((start, end))
}

/// Map an HTTP status and chart body to samples or a `SourceError`.
///
/// Yahoo reports unknown symbols as a 404 with a normal chart envelope, so a
/// provider error in the body wins over the status code.
fn classify_chart_response(status: StatusCode, body: &str) -> Result<Vec<PriceSample>, SourceError> {
    match serde_json::from_str::<ChartResponse>(body) {
        Ok(chart) if chart.chart.error.is_some() || status.is_success() => parse_chart(chart),
        Ok(_) => Err(SourceError::Status(status.as_u16())),
        Err(_) if !status.is_success() => Err(SourceError::Status(status.as_u16())),
        Err(e) => Err(SourceError::Malformed(e.to_string())),
    }
}

impl QuoteSource for YahooClient {
    fn fetch(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceSample>, SourceError> {
        self.fetch_chart(symbol, lookback_days)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Turn a chart payload into forward-filled samples, oldest first.
fn parse_chart(body: ChartResponse) -> Result<Vec<PriceSample>, SourceError> {
    if let Some(err) = body.chart.error {
        return Err(SourceError::Provider {
            code: err.code,
            description: err.description,
        });
    }

    let result = body
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or(SourceError::Empty)?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    if result.timestamp.len() != closes.len() {
        return Err(SourceError::Malformed(format!(
            "{} timestamps but {} closes",
            result.timestamp.len(),
            closes.len()
        )));
    }

    let mut raw = Vec::with_capacity(closes.len());
    for (ts, close) in result.timestamp.into_iter().zip(closes) {
        let date = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| SourceError::Malformed(format!("invalid timestamp {ts}")))?
            .date_naive();
        raw.push((ts, date, close));
    }
    raw.sort_by_key(|(ts, _, _)| *ts);

    let dated: Vec<_> = raw.into_iter().map(|(_, date, close)| (date, close)).collect();
    let mut samples = forward_fill(&dated);
    // Crypto charts can append a live bar on the same date as the day's
    // regular bar; keep the later one so a session is never compared with itself.
    samples.dedup_by(|later, earlier| {
        if later.date == earlier.date {
            *earlier = *later;
            true
        } else {
            false
        }
    });
    if samples.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<PriceSample>, SourceError> {
        parse_chart(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parses_closes_oldest_first() {
        let json = r#"{"chart":{"result":[{
            "meta":{"symbol":"005930.KS","currency":"KRW"},
            "timestamp":[1741132800,1740960000,1741046400],
            "indicators":{"quote":[{"close":[71200.0,70000.0,70500.0],"open":[1,2,3]}]}
        }],"error":null}}"#;

        let samples = parse(json).unwrap();
        let closes: Vec<f64> = samples.iter().map(|s| s.close).collect();
        assert_eq!(closes, [70000.0, 70500.0, 71200.0]);
        assert!(samples.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn null_closes_are_forward_filled() {
        let json = r#"{"chart":{"result":[{
            "timestamp":[1740960000,1741046400,1741132800,1741219200],
            "indicators":{"quote":[{"close":[null,100.0,null,110.0]}]}
        }],"error":null}}"#;

        let samples = parse(json).unwrap();
        let closes: Vec<f64> = samples.iter().map(|s| s.close).collect();
        assert_eq!(closes, [100.0, 100.0, 110.0]);
    }

    #[test]
    fn provider_error_is_reported() {
        let json = r#"{"chart":{"result":null,"error":{
            "code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

        match parse(json) {
            Err(SourceError::Provider { code, description }) => {
                assert_eq!(code, "Not Found");
                assert!(description.contains("delisted"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn missing_or_all_null_data_is_empty() {
        let no_result = r#"{"chart":{"result":[],"error":null}}"#;
        assert!(matches!(parse(no_result), Err(SourceError::Empty)));

        let no_timestamps = r#"{"chart":{"result":[{"indicators":{"quote":[{}]}}],"error":null}}"#;
        assert!(matches!(parse(no_timestamps), Err(SourceError::Empty)));

        let all_null = r#"{"chart":{"result":[{
            "timestamp":[1740960000,1741046400],
            "indicators":{"quote":[{"close":[null,null]}]}
        }],"error":null}}"#;
        assert!(matches!(parse(all_null), Err(SourceError::Empty)));
    }

    #[test]
    fn mismatched_lengths_are_malformed() {
        let json = r#"{"chart":{"result":[{
            "timestamp":[1740960000,1741046400],
            "indicators":{"quote":[{"close":[1.0]}]}
        }],"error":null}}"#;
        assert!(matches!(parse(json), Err(SourceError::Malformed(_))));
    }

    #[test]
    fn same_date_bars_keep_the_later_close() {
        // 1741132800 = 2025-03-05 00:00 UTC, 1741170000 = 2025-03-05 10:20 UTC (live bar).
        let json = r#"{"chart":{"result":[{
            "timestamp":[1741046400,1741132800,1741170000],
            "indicators":{"quote":[{"close":[100.0,105.0,107.0]}]}
        }],"error":null}}"#;

        let samples = parse(json).unwrap();
        let closes: Vec<f64> = samples.iter().map(|s| s.close).collect();
        assert_eq!(closes, [100.0, 107.0]);
        let r = crate::math::compute(&samples);
        assert!((r.change_percent - 7.0).abs() < 1e-9);
    }

    #[test]
    fn null_live_bar_keeps_the_days_close() {
        let json = r#"{"chart":{"result":[{
            "timestamp":[1741046400,1741132800,1741170000],
            "indicators":{"quote":[{"close":[100.0,105.0,null]}]}
        }],"error":null}}"#;

        let closes: Vec<f64> = parse(json).unwrap().iter().map(|s| s.close).collect();
        assert_eq!(closes, [100.0, 105.0]);
    }

    #[test]
    fn not_found_with_envelope_is_provider_error() {
        let body = r#"{"chart":{"result":null,"error":{
            "code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        match classify_chart_response(StatusCode::NOT_FOUND, body) {
            Err(SourceError::Provider { code, .. }) => assert_eq!(code, "Not Found"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn server_error_without_json_is_status() {
        let result = classify_chart_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(matches!(result, Err(SourceError::Status(500))));

        let no_envelope_error = r#"{"chart":{"result":[],"error":null}}"#;
        let result = classify_chart_response(StatusCode::BAD_GATEWAY, no_envelope_error);
        assert!(matches!(result, Err(SourceError::Status(502))));
    }

    #[test]
    fn ok_with_unparseable_body_is_malformed() {
        let result = classify_chart_response(StatusCode::OK, "not json");
        assert!(matches!(result, Err(SourceError::Malformed(_))));
    }

    #[test]
    fn ok_with_chart_parses_samples() {
        let body = r#"{"chart":{"result":[{
            "timestamp":[1740960000,1741046400],
            "indicators":{"quote":[{"close":[10.0,11.0]}]}
        }],"error":null}}"#;
        assert_eq!(classify_chart_response(StatusCode::OK, body).unwrap().len(), 2);
    }

    #[test]
    fn lookback_window_spans_requested_days() {
        let end = DateTime::from_timestamp(1741132800, 0).unwrap();
        let (start, stop) = lookback_window(end, 10).unwrap();
        assert_eq!(stop, end);
        assert_eq!((end - start).num_days(), 10);
    }

    #[test]
    fn oversized_lookback_is_malformed_not_a_panic() {
        let end = DateTime::from_timestamp(1741132800, 0).unwrap();
        assert!(matches!(lookback_window(end, u32::MAX), Err(SourceError::Malformed(_))));
    }
}
