use http::Method;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "Path"),
            ParameterLocation::Query => write!(f, "Query"),
            ParameterLocation::Header => write!(f, "Header"),
            ParameterLocation::Cookie => write!(f, "Cookie"),
        }
    }
}

impl From<oas3::spec::ParameterIn> for ParameterLocation {
    fn from(loc: oas3::spec::ParameterIn) -> Self {
        match loc {
            oas3::spec::ParameterIn::Path => ParameterLocation::Path,
            oas3::spec::ParameterIn::Query => ParameterLocation::Query,
            oas3::spec::ParameterIn::Header => ParameterLocation::Header,
            oas3::spec::ParameterIn::Cookie => ParameterLocation::Cookie,
        }
    }
}

/// One (template, method, parameters) triple extracted from an API document.
#[derive(Debug, Clone)]
pub struct RouteMeta {
    pub method: Method,
    pub path_pattern: String,
    pub operation_id: Option<String>,
    pub parameters: Vec<ParameterMeta>,
    pub base_path: String,
}

impl RouteMeta {
    pub fn new(method: Method, path_pattern: impl Into<String>) -> Self {
        Self {
            method,
            path_pattern: path_pattern.into(),
            operation_id: None,
            parameters: Vec::new(),
            base_path: String::new(),
        }
    }

    #[must_use]
    pub fn with_path_param(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterMeta::path(name));
        self
    }

    /// Template prefixed with the server base path.
    #[must_use]
    pub fn full_path(&self) -> String {
        format!("{}{}", self.base_path, self.path_pattern)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterMeta {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
}

impl ParameterMeta {
    /// Required path parameter.
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            required: true,
        }
    }
}
