//! Culture-aware number, currency, and percentage rendering and parsing.

use crate::format::conventions::{Conventions, conventions};
use crate::types::Culture;

/// Format a number with the culture's grouping and decimal separators.
///
/// `decimals` overrides the fraction digit count only; separators always
/// come from the culture. When omitted, two fraction digits are used.
///
/// # Example
///
/// ```
/// use locres::{Culture, format_number};
///
/// let us = Culture::new("en-US");
/// assert_eq!(format_number(1234.56, None, &us), "1,234.56");
/// assert_eq!(format_number(1234.56, Some(3), &us), "1,234.560");
///
/// let de = Culture::new("de-DE");
/// assert_eq!(format_number(1234.56, None, &de), "1.234,56");
/// ```
pub fn format_number(value: f64, decimals: Option<u32>, culture: &Culture) -> String {
    render_decimal(value, decimals.unwrap_or(2), conventions(culture))
}

/// Format a currency amount per the culture's currency pattern.
///
/// A `symbol` override replaces the glyph only; placement, spacing,
/// grouping, and fraction digits still follow the culture.
///
/// # Example
///
/// ```
/// use locres::{Culture, format_currency};
///
/// let us = Culture::new("en-US");
/// assert_eq!(format_currency(1234.56, None, &us), "$1,234.56");
/// assert_eq!(format_currency(1234.56, Some("€"), &us), "€1,234.56");
/// ```
pub fn format_currency(value: f64, symbol: Option<&str>, culture: &Culture) -> String {
    let conv = conventions(culture);
    let glyph = symbol.unwrap_or(conv.currency_symbol);
    let amount = render_decimal(value, conv.currency_decimals, conv);
    match (conv.currency_prefix, conv.currency_space) {
        (true, true) => format!("{glyph} {amount}"),
        (true, false) => format!("{glyph}{amount}"),
        (false, true) => format!("{amount} {glyph}"),
        (false, false) => format!("{amount}{glyph}"),
    }
}

/// Format a fractional value as a percentage.
///
/// The value is scaled by 100 and rendered with `decimal_places` fraction
/// digits and the culture's percent glyph placement.
///
/// # Example
///
/// ```
/// use locres::{Culture, format_percentage};
///
/// assert_eq!(format_percentage(0.1234, 2, &Culture::new("en-US")), "12.34%");
/// assert_eq!(format_percentage(0.1234, 2, &Culture::new("tr-TR")), "%12,34");
/// ```
pub fn format_percentage(value: f64, decimal_places: u32, culture: &Culture) -> String {
    let conv = conventions(culture);
    let rendered = render_decimal(value * 100.0, decimal_places, conv);
    if conv.percent_prefix {
        format!("%{rendered}")
    } else {
        format!("{rendered}%")
    }
}

/// Parse a number written in the culture's conventions.
///
/// Group separators (including no-break spaces) are optional; the decimal
/// separator must be the culture's. Returns `None` on malformed input,
/// never an error.
pub fn parse_number(text: &str, culture: &Culture) -> Option<f64> {
    let conv = conventions(culture);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        if ch == conv.decimal_separator {
            normalized.push('.');
        } else if Some(ch) == conv.group_separator || ch == '\u{a0}' || ch == '\u{202f}' {
            // Grouping is cosmetic on the way in.
        } else {
            normalized.push(ch);
        }
    }

    let value: f64 = normalized.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a currency amount, with or without a currency glyph.
///
/// The culture's own glyph and the common currency glyphs are recognized
/// at the start or end of the amount only, so `"$1,234.56"`, `"1.234,56 €"`,
/// and bare `"1,234.56"` all parse, while a glyph between digits makes the
/// input malformed. Returns `None` on malformed input.
pub fn parse_currency(text: &str, culture: &Culture) -> Option<f64> {
    let conv = conventions(culture);
    let mut cleaned = text.trim();
    for glyph in [conv.currency_symbol, "$", "€", "£", "¥", "₺", "₽", "¤"] {
        if let Some(rest) = cleaned.strip_prefix(glyph) {
            cleaned = rest.trim();
        } else if let Some(rest) = cleaned.strip_suffix(glyph) {
            cleaned = rest.trim();
        }
    }
    parse_number(cleaned, culture)
}

/// Round to `decimals` fraction digits and apply the culture's separators.
fn render_decimal(value: f64, decimals: u32, conv: &Conventions) -> String {
    let rounded = format!("{:.*}", decimals as usize, value.abs());
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let negative = value < 0.0 && !is_zero;

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::with_capacity(rounded.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, conv));
    if !frac_part.is_empty() {
        out.push(conv.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, conv: &Conventions) -> String {
    let Some(sep) = conv.group_separator else {
        return digits.to_owned();
    };
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % conv.group_size == 0 {
            out.push(sep);
        }
        out.push(*ch);
    }
    out
}
