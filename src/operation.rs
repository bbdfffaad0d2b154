//! HTTP operations attached to path segments.

use http::Method;
use std::fmt;

/// The verbs an operation may carry. Anything else is rejected at build time.
pub const SUPPORTED_METHODS: [Method; 8] = [
    Method::GET,
    Method::PUT,
    Method::POST,
    Method::DELETE,
    Method::PATCH,
    Method::HEAD,
    Method::OPTIONS,
    Method::TRACE,
];

#[must_use]
pub fn is_supported_method(method: &Method) -> bool {
    SUPPORTED_METHODS.contains(method)
}

/// An HTTP method bound to a path segment, marking it as invokable.
///
/// A segment never holds two operations with the same method; the check lives
/// in [`PathSegment::add_operation`](crate::segment::PathSegment::add_operation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation {
    method: Method,
    operation_id: Option<String>,
}

impl Operation {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            operation_id: None,
        }
    }

    /// Attach the `operationId` from the source document.
    #[must_use]
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn operation_id(&self) -> Option<&str> {
        self.operation_id.as_deref()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation_id {
            Some(id) => write!(f, "{} ({id})", self.method),
            None => write!(f, "{}", self.method),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_methods() {
        for m in &SUPPORTED_METHODS {
            assert!(is_supported_method(m));
        }
        assert!(!is_supported_method(&Method::CONNECT));
        let custom = Method::from_bytes(b"PURGE").unwrap_or(Method::CONNECT);
        assert!(!is_supported_method(&custom));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::new(Method::GET).to_string(), "GET");
        assert_eq!(
            Operation::new(Method::POST)
                .with_operation_id("add_pet")
                .to_string(),
            "POST (add_pet)"
        );
    }
}
