pub mod format;
pub mod resolver;
pub mod types;

pub use format::{
    Conventions, DateOrder, FormatError, conventions, format_currency, format_date, format_number,
    format_percentage, parse_currency, parse_date, parse_number, substitute,
};
pub use resolver::{
    InMemoryProvider, LocalizeError, Localizer, LocalizerOptions, ResourceProvider,
    compute_suggestions,
};
pub use types::{Ancestors, Culture, Value};

/// Creates a `Vec<Value>` of positional template arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or dates directly.
///
/// # Example
///
/// ```
/// use locres::args;
///
/// let a = args!["Alice", 3];
/// assert_eq!(a.len(), 2);
/// assert_eq!(a[0].as_string(), Some("Alice"));
/// assert_eq!(a[1].as_number(), Some(3));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
