//! Pure formatting helpers for report cells.
//!
//! Nothing here touches I/O, so the exact strings that land in the README
//! can be pinned down in tests.

/// Symbols priced as index points rather than in a currency.
pub const INDEX_SYMBOLS: [&str; 7] = ["^KS11", "^KQ11", "^KS200", "^GSPC", "^IXIC", "^DJI", "^N225"];

pub const RISE_GLYPH: &str = "🔴";
pub const FALL_GLYPH: &str = "🔵";
pub const FLAT_GLYPH: &str = "⚪";

pub fn is_index_symbol(symbol: &str) -> bool {
    INDEX_SYMBOLS.contains(&symbol)
}

/// Format a price cell.
///
/// Indices: `2,650.31`. Everything else: whole units plus currency,
/// e.g. `71,200 KRW`.
pub fn format_price(price: f64, symbol: &str, currency: &str) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    if is_index_symbol(symbol) {
        return group_thousands(price, 2);
    }
    let whole = group_thousands(price.round(), 0);
    if currency.is_empty() {
        whole
    } else {
        format!("{whole} {currency}")
    }
}

/// Format a change-rate cell: glyph, sign for gains only, two decimals, `%`.
pub fn format_rate(rate: f64) -> String {
    if rate > 0.0 {
        format!("{RISE_GLYPH} +{rate:.2}%")
    } else if rate < 0.0 {
        format!("{FALL_GLYPH} {rate:.2}%")
    } else {
        // Covers -0.0 and NaN as well.
        format!("{FLAT_GLYPH} 0.00%")
    }
}

/// Format `value` with `decimals` places and `,` between thousands.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let raw = format!("{value:.decimals$}");
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Escape a value for use inside a Markdown table cell.
pub fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
