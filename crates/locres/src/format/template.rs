//! Positional placeholder substitution for resolved templates.
//!
//! The template language is deliberately small: `{0}`, `{1}`, ... substitute
//! the `Display` rendering of the corresponding argument, and `{{` / `}}`
//! are literal brace escapes. There are no per-argument format specifiers;
//! culture-aware argument rendering is done up front with the formatting
//! functions in this module's parent and passed in as strings.

use thiserror::Error;

use crate::types::Value;

/// A template/caller contract violation detected during substitution.
///
/// These are always surfaced, unlike resolution misses: a mismatched
/// placeholder indicates a broken template or call site rather than a
/// missing translation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder referenced an argument index that was not supplied.
    #[error("placeholder {{{index}}} exceeds the {supplied} supplied argument(s)")]
    ArgumentOutOfRange { index: usize, supplied: usize },

    /// A `{` was opened but never closed.
    #[error("unclosed placeholder at offset {position}")]
    UnclosedPlaceholder { position: usize },

    /// Placeholder content was not a decimal argument index.
    #[error("invalid placeholder '{{{content}}}'")]
    InvalidPlaceholder { content: String },
}

/// Substitute positional arguments into a template.
///
/// # Example
///
/// ```
/// use locres::{args, substitute};
///
/// let out = substitute("Welcome to {0}, {1}!", &args!["Ankara", "Ayşe"]).unwrap();
/// assert_eq!(out, "Welcome to Ankara, Ayşe!");
///
/// let escaped = substitute("{{0}} is literal", &args![]).unwrap();
/// assert_eq!(escaped, "{0} is literal");
/// ```
pub fn substitute(template: &str, args: &[Value]) -> Result<String, FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '{' if chars.get(i + 1) == Some(&'{') => {
                out.push('{');
                i += 2;
            }
            '}' if chars.get(i + 1) == Some(&'}') => {
                out.push('}');
                i += 2;
            }
            '{' => {
                let start = i;
                let mut j = i + 1;
                while j < chars.len() && chars[j] != '}' {
                    j += 1;
                }
                if j == chars.len() {
                    return Err(FormatError::UnclosedPlaceholder { position: start });
                }
                let content: String = chars[i + 1..j].iter().collect();
                let index: usize =
                    content
                        .parse()
                        .map_err(|_| FormatError::InvalidPlaceholder {
                            content: content.clone(),
                        })?;
                let value = args.get(index).ok_or(FormatError::ArgumentOutOfRange {
                    index,
                    supplied: args.len(),
                })?;
                out.push_str(&value.to_string());
                i = j + 1;
            }
            // A lone `}` is passed through as a literal.
            ch => {
                out.push(ch);
                i += 1;
            }
        }
    }

    Ok(out)
}
