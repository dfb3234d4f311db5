//! Culture-aware date rendering and parsing.
//!
//! Dates are `chrono::NaiveDate` values. The default rendering is the
//! culture's short-date pattern from the conventions table; custom patterns
//! support the `yyyy`, `yy`, `MM`, `M`, `dd`, and `d` tokens with literal
//! separators passed through as given.

use chrono::{Datelike, NaiveDate};

use crate::format::conventions::{Conventions, DateOrder, conventions};
use crate::types::Culture;

/// Format a date for a culture.
///
/// With no `pattern`, the culture's short-date convention is used. A custom
/// pattern controls field order and padding; its literal separators are
/// honored as written.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use locres::{Culture, format_date};
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(format_date(date, None, &Culture::new("en-US")), "1/15/2025");
/// assert_eq!(format_date(date, None, &Culture::new("de-DE")), "15.01.2025");
/// assert_eq!(format_date(date, Some("yyyy-MM-dd"), &Culture::new("en-US")), "2025-01-15");
/// ```
pub fn format_date(date: NaiveDate, pattern: Option<&str>, culture: &Culture) -> String {
    match pattern {
        Some(p) => render_pattern(date, p),
        None => render_short(date, conventions(culture)),
    }
}

/// Parse a date written either as ISO-8601 or in the culture's short-date
/// order with `/`, `.`, or `-` separators.
///
/// Returns `None` on anything unparseable; this function never panics.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use locres::{Culture, parse_date};
///
/// let us = Culture::new("en-US");
/// let expected = NaiveDate::from_ymd_opt(2025, 1, 15);
/// assert_eq!(parse_date("1/15/2025", &us), expected);
/// assert_eq!(parse_date("2025-01-15", &us), expected);
/// assert_eq!(parse_date("invalid date", &us), None);
/// ```
pub fn parse_date(text: &str, culture: &Culture) -> Option<NaiveDate> {
    let trimmed = text.trim();

    // ISO-8601 is accepted regardless of culture.
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    let conv = conventions(culture);
    let parts: Vec<&str> = trimmed
        .split(['/', '.', '-', conv.date_separator])
        .collect();
    if parts.len() != 3 {
        return None;
    }

    let (year_text, month_text, day_text) = match conv.date_order {
        DateOrder::MonthDayYear => (parts[2], parts[0], parts[1]),
        DateOrder::DayMonthYear => (parts[2], parts[1], parts[0]),
        DateOrder::YearMonthDay => (parts[0], parts[1], parts[2]),
    };

    let year: i32 = year_text.trim().parse().ok()?;
    let month: u32 = month_text.trim().parse().ok()?;
    let day: u32 = day_text.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn render_short(date: NaiveDate, conv: &Conventions) -> String {
    let sep = conv.date_separator;
    let day = pad(date.day(), conv.zero_pad_date);
    let month = pad(date.month(), conv.zero_pad_date);
    let year = date.year();
    match conv.date_order {
        DateOrder::MonthDayYear => format!("{month}{sep}{day}{sep}{year}"),
        DateOrder::DayMonthYear => format!("{day}{sep}{month}{sep}{year}"),
        DateOrder::YearMonthDay => format!("{year}{sep}{month}{sep}{day}"),
    }
}

fn pad(field: u32, zero_pad: bool) -> String {
    if zero_pad {
        format!("{field:02}")
    } else {
        field.to_string()
    }
}

fn render_pattern(date: NaiveDate, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let run = chars[i..].iter().take_while(|&&c| c == ch).count();
        match ch {
            'y' => {
                if run >= 4 {
                    out.push_str(&format!("{:04}", date.year()));
                } else {
                    out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                }
            }
            'M' => out.push_str(&pad(date.month(), run >= 2)),
            'd' => out.push_str(&pad(date.day(), run >= 2)),
            _ => {
                for _ in 0..run {
                    out.push(ch);
                }
            }
        }
        i += run;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date")
    }

    #[test]
    fn short_year_token_truncates() {
        assert_eq!(render_pattern(date(), "d/M/yy"), "7/3/25");
    }

    #[test]
    fn literal_separators_are_kept() {
        assert_eq!(render_pattern(date(), "dd--MM--yyyy"), "07--03--2025");
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        let us = Culture::new("en-US");
        assert_eq!(parse_date("13/32/2025", &us), None);
        assert_eq!(parse_date("2025-13-01", &us), None);
    }

    #[test]
    fn parse_accepts_alternate_separator() {
        let de = Culture::new("de-DE");
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15);
        assert_eq!(parse_date("15.01.2025", &de), expected);
        assert_eq!(parse_date("15/01/2025", &de), expected);
    }
}
