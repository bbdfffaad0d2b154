use http::Method;
use std::fmt;

/// Error raised while registering templates into a [`UriModel`](crate::model::UriModel).
///
/// Every variant is fatal for the template that triggered it. Ingestion of a
/// whole document stops at the first error; see
/// [`UriModel::from_routes`](crate::model::UriModel::from_routes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The segment already carries an operation for this method
    DuplicateOperation {
        /// Template path being registered
        template: String,
        /// Method registered twice
        method: Method,
    },
    /// A placeholder has no matching path parameter in the route metadata
    UndocumentedPlaceholder {
        /// Template path being registered
        template: String,
        /// Raw segment containing the placeholder
        segment: String,
        /// Placeholder name without braces
        placeholder: String,
    },
    /// Method outside GET, PUT, POST, DELETE, PATCH, HEAD, OPTIONS, TRACE
    UnsupportedMethod {
        /// Template path being registered
        template: String,
        /// Rejected method
        method: Method,
    },
    /// The segment matcher could not be compiled
    InvalidMatcher {
        /// Raw segment value
        segment: String,
        /// Compiler message
        reason: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::DuplicateOperation { template, method } => {
                write!(
                    f,
                    "Duplicate operation: {method} is already registered for '{template}'"
                )
            }
            BuildError::UndocumentedPlaceholder {
                template,
                segment,
                placeholder,
            } => {
                write!(
                    f,
                    "Undocumented placeholder: '{{{placeholder}}}' in segment '{segment}' of '{template}' \
                    has no matching path parameter"
                )
            }
            BuildError::UnsupportedMethod { template, method } => {
                write!(
                    f,
                    "Unsupported method: {method} on '{template}'. \
                    Expected one of GET, PUT, POST, DELETE, PATCH, HEAD, OPTIONS, TRACE"
                )
            }
            BuildError::InvalidMatcher { segment, reason } => {
                write!(f, "Invalid matcher for segment '{segment}': {reason}")
            }
        }
    }
}

impl std::error::Error for BuildError {}
