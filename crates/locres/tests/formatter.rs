//! Tests for the locale-aware formatter/parser.

use chrono::NaiveDate;
use locres::{
    Culture, format_currency, format_date, format_number, format_percentage, parse_currency,
    parse_date, parse_number,
};

fn us() -> Culture {
    Culture::new("en-US")
}

fn de() -> Culture {
    Culture::new("de-DE")
}

fn tr() -> Culture {
    Culture::new("tr-TR")
}

fn jan_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn format_date_uses_culture_short_pattern() {
    assert_eq!(format_date(jan_15(), None, &us()), "1/15/2025");
    assert_eq!(format_date(jan_15(), None, &de()), "15.01.2025");
    assert_eq!(format_date(jan_15(), None, &Culture::new("ja-JP")), "2025/01/15");
}

#[test]
fn format_date_honors_custom_pattern() {
    assert_eq!(format_date(jan_15(), Some("yyyy-MM-dd"), &us()), "2025-01-15");
    assert_eq!(format_date(jan_15(), Some("d.M.yy"), &us()), "15.1.25");
}

#[test]
fn parse_date_accepts_culture_short_format() {
    assert_eq!(parse_date("1/15/2025", &us()), Some(jan_15()));
    assert_eq!(parse_date("15.01.2025", &de()), Some(jan_15()));
}

#[test]
fn parse_date_accepts_iso_format_everywhere() {
    assert_eq!(parse_date("2025-01-15", &us()), Some(jan_15()));
    assert_eq!(parse_date("2025-01-15", &de()), Some(jan_15()));
    assert_eq!(parse_date("2025-01-15", &tr()), Some(jan_15()));
}

#[test]
fn parse_date_returns_none_for_invalid_input() {
    assert_eq!(parse_date("invalid date", &us()), None);
    assert_eq!(parse_date("", &us()), None);
    assert_eq!(parse_date("1/2", &us()), None);
}

#[test]
fn parse_date_rejects_out_of_range_years() {
    // Years beyond i32 must fail cleanly, not wrap to a different year.
    assert_eq!(parse_date("1/15/4294899999", &us()), None);
    assert_eq!(parse_date("1/15/99999999999", &us()), None);
    assert_eq!(parse_date("15.01.4294899999", &de()), None);
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn format_number_uses_culture_separators() {
    assert_eq!(format_number(1234.56, None, &us()), "1,234.56");
    assert_eq!(format_number(1234.56, None, &de()), "1.234,56");
    assert_eq!(format_number(1234.56, None, &Culture::new("fr-FR")), "1\u{a0}234,56");
}

#[test]
fn format_number_custom_digits_override_count_only() {
    assert_eq!(format_number(1234.56, Some(3), &us()), "1,234.560");
    assert_eq!(format_number(1234.56, Some(3), &de()), "1.234,560");
}

#[test]
fn format_number_handles_negatives() {
    assert_eq!(format_number(-1234.56, None, &us()), "-1,234.56");
}

#[test]
fn parse_number_accepts_grouped_and_ungrouped() {
    assert_eq!(parse_number("1,234.56", &us()), Some(1234.56));
    assert_eq!(parse_number("1234.56", &us()), Some(1234.56));
    assert_eq!(parse_number("1.234,56", &de()), Some(1234.56));
}

#[test]
fn parse_number_returns_none_for_invalid_input() {
    assert_eq!(parse_number("invalid number", &us()), None);
    assert_eq!(parse_number("", &us()), None);
    assert_eq!(parse_number("   ", &us()), None);
}

#[test]
fn parse_number_round_trips_formatted_output() {
    let value = 9876543.21;
    for culture in [us(), de(), tr(), Culture::new("fr-FR")] {
        let text = format_number(value, None, &culture);
        assert_eq!(parse_number(&text, &culture), Some(value), "culture {culture}");
    }
}

// =========================================================================
// Currency
// =========================================================================

#[test]
fn format_currency_follows_culture_pattern() {
    assert_eq!(format_currency(1234.56, None, &us()), "$1,234.56");
    assert_eq!(format_currency(1234.56, None, &de()), "1.234,56 €");
    assert_eq!(format_currency(1234.56, None, &tr()), "1.234,56 ₺");
}

#[test]
fn currency_symbol_override_changes_glyph_only() {
    // The glyph changes; placement and grouping stay en-US.
    assert_eq!(format_currency(1234.56, Some("€"), &us()), "€1,234.56");
    // And stay de-DE here: suffix position with a space.
    assert_eq!(format_currency(1234.56, Some("$"), &de()), "1.234,56 $");
}

#[test]
fn parse_currency_accepts_symbol_and_bare_forms() {
    assert_eq!(parse_currency("$1,234.56", &us()), Some(1234.56));
    assert_eq!(parse_currency("1,234.56", &us()), Some(1234.56));
    assert_eq!(parse_currency("1.234,56 €", &de()), Some(1234.56));
}

#[test]
fn parse_currency_accepts_foreign_glyphs() {
    // Common glyphs are stripped even when they are not the culture's own.
    assert_eq!(parse_currency("€1,234.56", &us()), Some(1234.56));
}

#[test]
fn parse_currency_returns_none_for_invalid_input() {
    assert_eq!(parse_currency("invalid currency", &us()), None);
    assert_eq!(parse_currency("$", &us()), None);
}

#[test]
fn parse_currency_rejects_glyphs_between_digits() {
    // Glyphs are accepted at the edges of the amount only.
    assert_eq!(parse_currency("1$2", &us()), None);
    assert_eq!(parse_currency("$1,2$34.56", &us()), None);
    assert_eq!(parse_currency("1.2€34,56", &de()), None);
}

// =========================================================================
// Percentages
// =========================================================================

#[test]
fn format_percentage_scales_and_appends_glyph() {
    assert_eq!(format_percentage(0.1234, 2, &us()), "12.34%");
    assert_eq!(format_percentage(0.5, 0, &us()), "50%");
}

#[test]
fn format_percentage_uses_culture_conventions() {
    assert_eq!(format_percentage(0.1234, 2, &de()), "12,34%");
    // Turkish writes the percent glyph before the number.
    assert_eq!(format_percentage(0.1234, 2, &tr()), "%12,34");
}
