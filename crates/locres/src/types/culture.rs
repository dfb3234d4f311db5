use serde::{Deserialize, Serialize};

/// A hierarchical locale tag such as `"en-US"`, `"tr"`, or the invariant root.
///
/// Cultures form a specificity hierarchy: a specific culture (`"en-US"`) has
/// a neutral parent (`"en"`), which in turn has the invariant culture (the
/// empty tag) as its root. The hierarchy is derived purely from the tag text,
/// so a `Culture` is a cheap immutable value type.
///
/// Tags are normalized on construction: the language subtag is lowercased,
/// region subtags are uppercased, and `_` separators are rewritten to `-`.
///
/// # Example
///
/// ```
/// use locres::Culture;
///
/// let culture = Culture::new("EN_us");
/// assert_eq!(culture.as_str(), "en-US");
/// assert_eq!(culture.parent(), Some(Culture::new("en")));
/// assert_eq!(Culture::new("en").parent(), Some(Culture::invariant()));
/// assert_eq!(Culture::invariant().parent(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Culture(String);

impl Culture {
    /// Create a culture from a tag, normalizing subtag casing and separators.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(normalize(tag.as_ref()))
    }

    /// The invariant culture: the empty tag at the root of every hierarchy.
    pub fn invariant() -> Self {
        Self(String::new())
    }

    /// Get the normalized tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language subtag (`"en"` for `"en-US"`), or `""` for the invariant
    /// culture.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }

    /// True if this is the invariant root culture.
    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this is a neutral culture (a bare language subtag).
    pub fn is_neutral(&self) -> bool {
        !self.0.is_empty() && !self.0.contains('-')
    }

    /// True if this is a specific culture (language plus at least one more
    /// subtag).
    pub fn is_specific(&self) -> bool {
        self.0.contains('-')
    }

    /// The next-less-specific culture in the hierarchy.
    ///
    /// A specific culture yields its neutral parent, a neutral culture yields
    /// the invariant culture, and the invariant culture has no parent.
    pub fn parent(&self) -> Option<Culture> {
        if self.is_invariant() {
            return None;
        }
        match self.0.rfind('-') {
            Some(idx) => Some(Culture(self.0[..idx].to_owned())),
            None => Some(Culture::invariant()),
        }
    }

    /// Walk the hierarchy from this culture down to the invariant root.
    ///
    /// Yields the culture itself first, then each parent in turn, ending at
    /// the invariant culture.
    pub fn self_and_ancestors(&self) -> Ancestors {
        Ancestors {
            current: Some(self.clone()),
        }
    }
}

/// Iterator over a culture and its ancestors, ending at the invariant root.
#[derive(Debug)]
pub struct Ancestors {
    current: Option<Culture>,
}

impl Iterator for Ancestors {
    type Item = Culture;

    fn next(&mut self) -> Option<Culture> {
        let culture = self.current.take()?;
        self.current = culture.parent();
        Some(culture)
    }
}

/// Normalize a raw tag: `-`/`_` separated subtags with the language part
/// lowercased, four-letter script subtags title-cased, and everything else
/// (regions, numeric areas) uppercased.
fn normalize(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    for (i, part) in tag.split(['-', '_']).enumerate() {
        if part.is_empty() {
            continue;
        }
        if i > 0 {
            out.push('-');
        }
        if i == 0 {
            out.extend(part.chars().map(|c| c.to_ascii_lowercase()));
        } else if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.extend(chars.map(|c| c.to_ascii_lowercase()));
            }
        } else {
            out.extend(part.chars().map(|c| c.to_ascii_uppercase()));
        }
    }
    out
}

impl From<&str> for Culture {
    fn from(tag: &str) -> Self {
        Culture::new(tag)
    }
}

impl From<String> for Culture {
    fn from(tag: String) -> Self {
        Culture::new(tag)
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
