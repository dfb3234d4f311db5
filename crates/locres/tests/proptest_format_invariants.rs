//! Property-based invariant tests for the formatter/parser.
//!
//! Verifies structural guarantees of culture-aware formatting:
//!
//! 1. Number round trip: parse(format(x)) == x for two-decimal values
//! 2. Currency round trip, with and without the glyph
//! 3. Date round trip through every culture's short pattern
//! 4. parse_date never panics on arbitrary input
//! 5. parse_number never panics on arbitrary input
//! 6. Formatted numbers contain no alphabetic characters
//! 7. Percentage output always carries the percent glyph

use chrono::NaiveDate;
use locres::{
    Culture, format_currency, format_date, format_number, format_percentage, parse_currency,
    parse_date, parse_number,
};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn cultures() -> Vec<Culture> {
    ["en-US", "en-GB", "de-DE", "fr-FR", "tr-TR", "ru-RU", "es-ES"]
        .into_iter()
        .map(Culture::new)
        .collect()
}

/// Two-decimal values built from integer cents, so the default rendering
/// preserves the value exactly.
fn cents() -> impl Strategy<Value = f64> {
    (-1_000_000_000i64..=1_000_000_000i64).prop_map(|c| c as f64 / 100.0)
}

proptest! {
    // ═════════════════════════════════════════════════════════════════
    // 1. Number round trip
    // ═════════════════════════════════════════════════════════════════

    #[test]
    fn number_round_trips_through_every_culture(value in cents()) {
        for culture in cultures() {
            let text = format_number(value, None, &culture);
            prop_assert_eq!(
                parse_number(&text, &culture),
                Some(value),
                "culture {} text {:?}",
                culture,
                text
            );
        }
    }

    // ═════════════════════════════════════════════════════════════════
    // 2. Currency round trip
    // ═════════════════════════════════════════════════════════════════

    #[test]
    fn currency_round_trips_with_and_without_glyph(value in cents()) {
        for culture in cultures() {
            let text = format_currency(value, None, &culture);
            prop_assert_eq!(parse_currency(&text, &culture), Some(value));

            let bare = format_number(value, None, &culture);
            prop_assert_eq!(parse_currency(&bare, &culture), Some(value));
        }
    }

    // ═════════════════════════════════════════════════════════════════
    // 3. Date round trip
    // ═════════════════════════════════════════════════════════════════

    #[test]
    fn date_round_trips_through_short_pattern(
        year in 1i32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        for culture in cultures() {
            let text = format_date(date, None, &culture);
            prop_assert_eq!(
                parse_date(&text, &culture),
                Some(date),
                "culture {} text {:?}",
                culture,
                text
            );
        }
    }

    // ═════════════════════════════════════════════════════════════════
    // 4 & 5. Parsers never panic
    // ═════════════════════════════════════════════════════════════════

    #[test]
    fn parse_date_never_panics(text in ".{0,40}") {
        for culture in cultures() {
            let _ = parse_date(&text, &culture);
        }
    }

    #[test]
    fn parse_number_never_panics(text in ".{0,40}") {
        for culture in cultures() {
            let _ = parse_number(&text, &culture);
        }
    }

    // ═════════════════════════════════════════════════════════════════
    // 6. Formatted numbers are purely numeric text
    // ═════════════════════════════════════════════════════════════════

    #[test]
    fn formatted_numbers_contain_no_letters(value in cents()) {
        for culture in cultures() {
            let text = format_number(value, None, &culture);
            prop_assert!(!text.chars().any(|c| c.is_alphabetic()));
        }
    }

    // ═════════════════════════════════════════════════════════════════
    // 7. Percentage output carries the glyph
    // ═════════════════════════════════════════════════════════════════

    #[test]
    fn percentage_output_carries_glyph(value in -10.0f64..10.0, places in 0u32..4) {
        for culture in cultures() {
            let text = format_percentage(value, places, &culture);
            prop_assert!(text.contains('%'));
        }
    }
}
