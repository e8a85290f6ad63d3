//! Market mood: one good/bad signal for the whole report.

use crate::domain::{ChangeResult, MarketMood};

pub const GOOD_EMOJI: &str = "😸";
pub const GOOD_MESSAGE: &str = "오늘은 시장이 웃고 있어요! 고양이도 신났어요.";
pub const BAD_EMOJI: &str = "😿";
pub const BAD_MESSAGE: &str = "시장이 조금 우울하네요. 고양이가 위로해 드릴게요.";

/// Classify by the sign of the summed change percentages.
///
/// Only a strictly positive sum is good; a flat or empty market is bad.
pub fn classify(results: &[ChangeResult]) -> MarketMood {
    let aggregate: f64 = results.iter().map(|r| r.change_percent).sum();
    let is_good = aggregate > 0.0;

    let (message, emoji) = if is_good {
        (GOOD_MESSAGE, GOOD_EMOJI)
    } else {
        (BAD_MESSAGE, BAD_EMOJI)
    };

    MarketMood {
        is_good,
        message: message.to_string(),
        emoji: emoji.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(pct: f64) -> ChangeResult {
        ChangeResult {
            current_price: 100.0,
            change_percent: pct,
            degenerate: false,
        }
    }

    #[test]
    fn positive_sum_is_good() {
        let mood = classify(&[change(1.5), change(-0.5), change(0.0)]);
        assert!(mood.is_good);
        assert_eq!(mood.emoji, GOOD_EMOJI);
        assert_eq!(mood.message, GOOD_MESSAGE);
        assert_eq!(mood.image_tag(), "happy");
    }

    #[test]
    fn non_positive_instruments_are_bad() {
        let mood = classify(&[change(-1.0), change(0.0), change(-0.25)]);
        assert!(!mood.is_good);
        assert_eq!(mood.emoji, BAD_EMOJI);
        assert_eq!(mood.message, BAD_MESSAGE);
        assert_eq!(mood.image_tag(), "sad");
    }

    #[test]
    fn sum_decides_not_majority() {
        // Two small gains lose to one large drop.
        let mood = classify(&[change(0.5), change(0.5), change(-3.0)]);
        assert!(!mood.is_good);

        let mood = classify(&[change(-0.5), change(-0.5), change(3.0)]);
        assert!(mood.is_good);
    }

    #[test]
    fn flat_and_empty_are_bad() {
        assert!(!classify(&[change(2.0), change(-2.0)]).is_good);
        assert!(!classify(&[]).is_good);
        assert!(!classify(&[ChangeResult::unavailable()]).is_good);
    }
}
