use http::Method;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use super::matcher::{compile_matcher, CaseFolded};
use crate::error::BuildError;
use crate::operation::Operation;
use crate::placeholder::{extract_placeholders, Placeholder, PlaceholderList, PLACEHOLDER_REGEX};

/// One `/`-delimited component of a URI template, stored as a tree node payload.
///
/// Holds the raw template value (e.g. `a{x}:{y}b`), the template path from the
/// root down to this segment, the extracted placeholders, the attached
/// operations and the compiled matcher.
#[derive(Debug, Clone)]
pub struct PathSegment {
    value: String,
    template_path: String,
    placeholders: PlaceholderList,
    operations: Vec<Operation>,
    position_template: String,
    matcher: Regex,
}

impl PathSegment {
    /// Create a segment from its raw template value and full template path.
    pub fn new(
        value: impl Into<String>,
        template_path: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let value = value.into();
        let (placeholders, position_template) = extract_placeholders(&value);
        let matcher = compile_matcher(&value).map_err(|e| BuildError::InvalidMatcher {
            segment: value.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            value,
            template_path: template_path.into(),
            placeholders,
            operations: Vec::new(),
            position_template,
            matcher,
        })
    }

    /// The segment standing for `/`: empty value, no placeholders.
    #[must_use]
    pub fn root() -> Self {
        Self {
            value: String::new(),
            template_path: "/".to_string(),
            placeholders: PlaceholderList::new(),
            operations: Vec::new(),
            position_template: String::new(),
            matcher: root_matcher(),
        }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Template path from the root to this segment, e.g. `/users/{id}`.
    #[must_use]
    pub fn template_path(&self) -> &str {
        &self.template_path
    }

    #[must_use]
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    #[must_use]
    pub fn placeholder(&self, name: &str) -> Option<&Placeholder> {
        self.placeholders.iter().find(|p| p.name == name)
    }

    /// Value with each placeholder replaced by its ordinal marker.
    #[must_use]
    pub fn position_template(&self) -> &str {
        &self.position_template
    }

    #[must_use]
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// `true` when the segment has placeholders.
    ///
    /// This is the intrinsic property. Classification that honours an
    /// [`Allocation`](crate::model::Allocation) goes through
    /// [`UriModel::is_variable_in`](crate::model::UriModel::is_variable_in).
    #[inline]
    #[must_use]
    pub fn is_variable(&self) -> bool {
        !self.placeholders.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.placeholders.is_empty()
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    #[must_use]
    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        self.operations.iter().find(|op| op.method() == method)
    }

    #[must_use]
    pub fn supports(&self, method: &Method) -> bool {
        self.operation(method).is_some()
    }

    #[must_use]
    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Methods of the attached operations, in registration order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.operations.iter().map(Operation::method)
    }

    /// Attach an operation, rejecting a second one with the same method.
    pub fn add_operation(&mut self, operation: Operation) -> Result<(), BuildError> {
        if self.supports(operation.method()) {
            return Err(BuildError::DuplicateOperation {
                template: self.template_path.clone(),
                method: operation.method().clone(),
            });
        }
        self.operations.push(operation);
        Ok(())
    }

    /// Case-insensitive full match of a literal segment against the template.
    #[must_use]
    pub fn matches_stable_path_segment(&self, candidate: &str) -> bool {
        self.matcher.is_match(CaseFolded::new(candidate).as_str())
    }

    /// Placeholder values bound by matching `candidate` against this segment.
    ///
    /// Returns `None` when the candidate does not match. Captured values keep
    /// the candidate's original case.
    #[must_use]
    pub fn capture_placeholder_values(&self, candidate: &str) -> Option<HashMap<Placeholder, String>> {
        let folded = CaseFolded::new(candidate);
        let caps = self.matcher.captures(folded.as_str())?;
        let values = self
            .placeholders
            .iter()
            .filter_map(|p| {
                let m = caps.get(p.index + 1)?;
                Some((p.clone(), folded.source_slice(m.start(), m.end()).to_string()))
            })
            .collect();
        Some(values)
    }

    /// Substitute placeholder values between the static fragments of the value.
    ///
    /// Placeholders missing from `values` are left as their ordinal marker;
    /// the result is then incomplete and will not match this segment.
    #[must_use]
    pub fn build_stable_path_segment(&self, values: &HashMap<Placeholder, String>) -> String {
        let mut out = String::with_capacity(self.position_template.len());
        for (i, fragment) in PLACEHOLDER_REGEX.split(&self.value).enumerate() {
            if let Some(placeholder) = i.checked_sub(1).and_then(|j| self.placeholders.get(j)) {
                match values.get(placeholder) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&placeholder.marker()),
                }
            }
            out.push_str(fragment);
        }
        out
    }

    /// Build a placeholder assignment from `(name, value)` pairs.
    ///
    /// Names that do not belong to this segment are ignored.
    pub fn assign<'a, I>(&self, pairs: I) -> HashMap<Placeholder, String>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .filter_map(|(name, value)| {
                self.placeholder(name)
                    .map(|p| (p.clone(), value.to_string()))
            })
            .collect()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[allow(clippy::expect_used)]
fn root_matcher() -> Regex {
    Regex::new("^$").expect("root matcher should be valid")
}
