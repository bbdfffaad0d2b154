//! # Placeholder Module
//!
//! Scans a raw template segment (e.g. `a{x}:{y}b`) for `{name}` placeholders.
//!
//! Extraction yields the placeholders in left-to-right order, each tagged with
//! its zero-based ordinal, together with a *position template*: a copy of the
//! segment where every placeholder occurrence is replaced by an ordinal marker
//! (`[p0]`, `[p1]`, ...).
//!
//! ```rust
//! use uritree::placeholder::extract_placeholders;
//!
//! let (placeholders, template) = extract_placeholders("a{x}:{y}b");
//! assert_eq!(placeholders[0].name, "x");
//! assert_eq!(placeholders[1].index, 1);
//! assert_eq!(template, "a[p0]:[p1]b");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// `{name}` with no nested braces; matches are non-overlapping.
#[allow(clippy::expect_used)]
pub(crate) static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder regex should be valid"));

/// Most segments carry one placeholder, a handful carry two or three.
pub const MAX_INLINE_PLACEHOLDERS: usize = 4;

pub type PlaceholderList = SmallVec<[Placeholder; MAX_INLINE_PLACEHOLDERS]>;

/// A named variable portion of a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Placeholder {
    /// Name without the surrounding braces
    pub name: String,
    /// Left-to-right position within the segment, starting at 0
    pub index: usize,
}

impl Placeholder {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// Ordinal marker standing in for this placeholder in a position template.
    #[must_use]
    pub fn marker(&self) -> String {
        marker(self.index)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name)
    }
}

/// Marker text for the placeholder at `index`, e.g. `[p2]`.
#[must_use]
pub fn marker(index: usize) -> String {
    format!("[p{index}]")
}

/// Extract placeholders from `segment` and build its position template.
///
/// Empty input, or input without placeholders, yields an empty list and an
/// unmodified copy of the segment.
#[must_use]
pub fn extract_placeholders(segment: &str) -> (PlaceholderList, String) {
    let mut placeholders = PlaceholderList::new();
    let mut template = String::with_capacity(segment.len());
    let mut last = 0;

    for (index, caps) in PLACEHOLDER_REGEX.captures_iter(segment).enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        template.push_str(&segment[last..whole.start()]);
        template.push_str(&marker(index));
        last = whole.end();
        placeholders.push(Placeholder::new(name.as_str(), index));
    }
    template.push_str(&segment[last..]);

    (placeholders, template)
}
