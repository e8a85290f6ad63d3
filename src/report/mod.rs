//! Report assembly and Markdown rendering.
//!
//! The layout is fixed: mood heading, mood message, a three-column quote
//! table, the image, and a timestamp footer. Cell formatting lives in
//! `format` so it can be tested on its own.

pub mod format;

use chrono::{DateTime, FixedOffset};

use crate::domain::{ChangeResult, Instrument, MarketMood};

pub use format::{format_price, format_rate};

pub const TITLE: &str = "금융 고양이 대시보드 (Finance Cat)";

/// One table row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub price: String,
    pub rate: String,
}

/// Everything the README shows for one run.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub mood: MarketMood,
    pub rows: Vec<ReportRow>,
    pub image_url: String,
    pub generated_at: DateTime<FixedOffset>,
    pub timezone_label: String,
}

impl Report {
    /// Build a report; rows keep the order of `instruments`.
    pub fn build(
        instruments: &[(Instrument, ChangeResult)],
        mood: MarketMood,
        image_url: impl Into<String>,
        generated_at: DateTime<FixedOffset>,
        timezone_label: impl Into<String>,
    ) -> Self {
        let rows = instruments
            .iter()
            .map(|(inst, result)| ReportRow {
                name: inst.name.clone(),
                price: format_price(result.current_price, &inst.symbol, &inst.currency),
                rate: format_rate(result.change_percent),
            })
            .collect();

        Self {
            title: TITLE.to_string(),
            mood,
            rows,
            image_url: image_url.into(),
            generated_at,
            timezone_label: timezone_label.into(),
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {} {}\n\n", self.mood.emoji, self.title));
        out.push_str(&format!("> {}\n\n", self.mood.message));

        out.push_str("### 💰 오늘의 시세\n\n");
        out.push_str("| 종목 | 현재가 | 등락률 |\n");
        out.push_str("| :--- | ---: | ---: |\n");
        for row in &self.rows {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                format::escape_cell(&row.name),
                row.price,
                row.rate
            ));
        }
        out.push('\n');

        out.push_str("### 📸 오늘의 힐링 고양이\n");
        out.push_str(&format!("![Random Cat]({})\n\n", self.image_url));

        out.push_str("---\n");
        out.push_str(&format!(
            "⏳ 마지막 업데이트: {} ({})\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.timezone_label
        ));
        out.push_str("*본 리포지토리는 GitHub Actions를 통해 자동화되었습니다.*\n");

        out
    }
}

/// Render the full document in one call.
pub fn render(
    instruments: &[(Instrument, ChangeResult)],
    mood: &MarketMood,
    image_url: &str,
    generated_at: DateTime<FixedOffset>,
    timezone_label: &str,
) -> String {
    Report::build(instruments, mood.clone(), image_url, generated_at, timezone_label).to_markdown()
}
