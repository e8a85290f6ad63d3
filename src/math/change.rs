//! Day-over-day percentage change with guard clauses.
//!
//! Provider series are messy: holidays, half-filled sessions, `null` closes.
//! Gaps are forward-filled before the calculation reads them, and every
//! degenerate case (too few samples, zero baseline, NaN) resolves to a flat
//! `0.0` instead of an error.

use chrono::NaiveDate;

use crate::domain::{ChangeResult, PriceSample};

/// Compute the change between the last two samples.
///
/// - `< 2` samples: degenerate, price `0`, change `0`.
/// - previous close `== 0`: degenerate, price kept, change `0`.
/// - NaN change: price kept, change `0`, not flagged degenerate.
pub fn compute(samples: &[PriceSample]) -> ChangeResult {
    let [.., prev, today] = samples else {
        return ChangeResult::unavailable();
    };

    if prev.close == 0.0 {
        return ChangeResult {
            current_price: today.close,
            change_percent: 0.0,
            degenerate: true,
        };
    }

    let mut change_percent = (today.close - prev.close) / prev.close * 100.0;
    if change_percent.is_nan() {
        change_percent = 0.0;
    }

    ChangeResult {
        current_price: today.close,
        change_percent,
        degenerate: false,
    }
}

/// Fill gaps in a dated close series from the last known value.
///
/// `None` and non-finite closes are gaps. Leading gaps have nothing to fill
/// from and are dropped. Input order is preserved.
pub fn forward_fill(raw: &[(NaiveDate, Option<f64>)]) -> Vec<PriceSample> {
    let mut out = Vec::with_capacity(raw.len());
    let mut last: Option<f64> = None;

    for &(date, close) in raw {
        let close = close.filter(|v| v.is_finite()).or(last);
        if let Some(close) = close {
            out.push(PriceSample { date, close });
            last = Some(close);
        }
    }

    out
}
