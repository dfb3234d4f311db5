//! Static per-culture formatting conventions.
//!
//! Grouping, separators, currency placement, and date field order are data,
//! not logic: the formatting and parsing functions consult this table and
//! contain no per-culture branches of their own. Lookup is by exact tag
//! first, then by language subtag, then the invariant defaults, so
//! `"de-AT"` picks up the `"de"` row without an explicit entry.

use crate::types::Culture;

/// Field order of a culture's short date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// e.g. `1/15/2025` (en-US)
    MonthDayYear,
    /// e.g. `15.01.2025` (de-DE)
    DayMonthYear,
    /// e.g. `2025/01/15` (ja-JP)
    YearMonthDay,
}

/// Number, currency, percent, and date conventions for one culture.
#[derive(Debug, Clone, PartialEq)]
pub struct Conventions {
    /// Separator between integer and fractional digits.
    pub decimal_separator: char,
    /// Digit group separator, if the culture groups at all.
    pub group_separator: Option<char>,
    /// Digits per group, counted from the right.
    pub group_size: usize,
    /// Default currency glyph.
    pub currency_symbol: &'static str,
    /// Glyph before the amount (`$1,234.56`) rather than after.
    pub currency_prefix: bool,
    /// Space between the glyph and the amount.
    pub currency_space: bool,
    /// Fraction digits in currency amounts.
    pub currency_decimals: u32,
    /// Percent glyph before the number (`%12,34`, Turkish style).
    pub percent_prefix: bool,
    /// Short-date field order.
    pub date_order: DateOrder,
    /// Short-date separator.
    pub date_separator: char,
    /// Zero-pad day and month in the short date (`01/05` vs `1/5`).
    pub zero_pad_date: bool,
}

/// Look up the conventions for a culture.
///
/// Falls back from the exact tag to the language subtag, then to invariant
/// defaults, so the table only needs entries where a region genuinely
/// deviates from its language.
pub fn conventions(culture: &Culture) -> &'static Conventions {
    lookup(culture.as_str())
        .or_else(|| lookup(culture.language()))
        .unwrap_or(&INVARIANT)
}

fn lookup(tag: &str) -> Option<&'static Conventions> {
    match tag {
        "en" | "en-US" => Some(&EN_US),
        "en-GB" => Some(&EN_GB),
        "de" => Some(&DE),
        "fr" => Some(&FR),
        "es" | "it" | "pt" => Some(&EURO_SOUTH),
        "nl" => Some(&NL),
        "tr" => Some(&TR),
        "ru" => Some(&RU),
        "ja" => Some(&JA),
        _ => None,
    }
}

static EN_US: Conventions = Conventions {
    decimal_separator: '.',
    group_separator: Some(','),
    group_size: 3,
    currency_symbol: "$",
    currency_prefix: true,
    currency_space: false,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::MonthDayYear,
    date_separator: '/',
    zero_pad_date: false,
};

static EN_GB: Conventions = Conventions {
    decimal_separator: '.',
    group_separator: Some(','),
    group_size: 3,
    currency_symbol: "£",
    currency_prefix: true,
    currency_space: false,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '/',
    zero_pad_date: true,
};

static DE: Conventions = Conventions {
    decimal_separator: ',',
    group_separator: Some('.'),
    group_size: 3,
    currency_symbol: "€",
    currency_prefix: false,
    currency_space: true,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    zero_pad_date: true,
};

static FR: Conventions = Conventions {
    decimal_separator: ',',
    group_separator: Some('\u{a0}'),
    group_size: 3,
    currency_symbol: "€",
    currency_prefix: false,
    currency_space: true,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '/',
    zero_pad_date: true,
};

// Spanish, Italian, and Portuguese share the German digit conventions but
// use slash-separated dates.
static EURO_SOUTH: Conventions = Conventions {
    decimal_separator: ',',
    group_separator: Some('.'),
    group_size: 3,
    currency_symbol: "€",
    currency_prefix: false,
    currency_space: true,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '/',
    zero_pad_date: true,
};

static NL: Conventions = Conventions {
    decimal_separator: ',',
    group_separator: Some('.'),
    group_size: 3,
    currency_symbol: "€",
    currency_prefix: true,
    currency_space: true,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '-',
    zero_pad_date: true,
};

static TR: Conventions = Conventions {
    decimal_separator: ',',
    group_separator: Some('.'),
    group_size: 3,
    currency_symbol: "₺",
    currency_prefix: false,
    currency_space: true,
    currency_decimals: 2,
    percent_prefix: true,
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    zero_pad_date: true,
};

static RU: Conventions = Conventions {
    decimal_separator: ',',
    group_separator: Some('\u{a0}'),
    group_size: 3,
    currency_symbol: "₽",
    currency_prefix: false,
    currency_space: true,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::DayMonthYear,
    date_separator: '.',
    zero_pad_date: true,
};

static JA: Conventions = Conventions {
    decimal_separator: '.',
    group_separator: Some(','),
    group_size: 3,
    currency_symbol: "¥",
    currency_prefix: true,
    currency_space: false,
    currency_decimals: 0,
    percent_prefix: false,
    date_order: DateOrder::YearMonthDay,
    date_separator: '/',
    zero_pad_date: true,
};

static INVARIANT: Conventions = Conventions {
    decimal_separator: '.',
    group_separator: Some(','),
    group_size: 3,
    currency_symbol: "¤",
    currency_prefix: true,
    currency_space: false,
    currency_decimals: 2,
    percent_prefix: false,
    date_order: DateOrder::MonthDayYear,
    date_separator: '/',
    zero_pad_date: true,
};
