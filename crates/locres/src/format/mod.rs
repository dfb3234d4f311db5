//! Stateless locale-aware formatting and parsing.
//!
//! Converts between native values (dates, decimals, currency, percentages)
//! and their culture-specific textual forms, in both directions. Formatting
//! always succeeds for well-formed values; parsing returns `None` on
//! malformed input rather than erroring. Conventions come from a static
//! per-culture data table rather than per-culture logic.

mod conventions;
mod date;
mod number;
mod template;

pub use conventions::{Conventions, DateOrder, conventions};
pub use date::{format_date, parse_date};
pub use number::{format_currency, format_number, format_percentage, parse_currency, parse_number};
pub use template::{FormatError, substitute};
