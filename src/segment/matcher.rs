use regex::Regex;

use crate::placeholder::PLACEHOLDER_REGEX;

/// Build the anchored pattern for a raw segment value.
///
/// Placeholders split the value into static fragments. Fragments are
/// lowercased and escaped, and a greedy `(.+)` capture sits between every
/// pair of adjacent fragments, so a segment with N placeholders yields N
/// capture groups in placeholder order.
///
/// | Segment       | Pattern              |
/// |---------------|----------------------|
/// | ``            | `^$`                 |
/// | `Users`       | `^users$`            |
/// | `{id}`        | `^(.+)$`             |
/// | `a{x}:{y}.b`  | `^a(.+):(.+)\.b$`    |
#[must_use]
pub fn segment_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 8);
    pattern.push('^');
    for (i, fragment) in PLACEHOLDER_REGEX.split(value).enumerate() {
        if i > 0 {
            pattern.push_str("(.+)");
        }
        pattern.push_str(&regex::escape(&fold_case(fragment)));
    }
    pattern.push('$');
    pattern
}

/// Lowercase one char at a time, so template fragments and literals fold alike.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// A lowercased literal that can map byte ranges back onto the original text.
pub(crate) struct CaseFolded<'a> {
    source: &'a str,
    folded: String,
    // (folded offset, source offset) at every source char boundary
    bounds: Vec<(usize, usize)>,
}

impl<'a> CaseFolded<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut bounds = Vec::with_capacity(source.len() + 1);
        for (offset, ch) in source.char_indices() {
            bounds.push((folded.len(), offset));
            folded.extend(ch.to_lowercase());
        }
        bounds.push((folded.len(), source.len()));
        Self {
            source,
            folded,
            bounds,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.folded
    }

    /// Original text behind folded bytes `start..end`.
    ///
    /// A bound inside the lowercase expansion of a single char is widened to
    /// cover that whole char.
    pub(crate) fn source_slice(&self, start: usize, end: usize) -> &'a str {
        let lo = match self.bounds.binary_search_by_key(&start, |b| b.0) {
            Ok(i) => self.bounds[i].1,
            Err(i) => self.bounds[i.saturating_sub(1)].1,
        };
        let hi = match self.bounds.binary_search_by_key(&end, |b| b.0) {
            Ok(i) | Err(i) => self.bounds[i.min(self.bounds.len() - 1)].1,
        };
        &self.source[lo..hi.max(lo)]
    }
}

/// Compile the matcher for a raw segment value.
pub(crate) fn compile_matcher(value: &str) -> Result<Regex, regex::Error> {
    Regex::new(&segment_pattern(value))
}
