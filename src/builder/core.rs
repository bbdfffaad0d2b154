use http::Method;
use tracing::{debug, info, warn};

use crate::error::BuildError;
use crate::model::UriModel;
use crate::operation::{is_supported_method, Operation};
use crate::placeholder::extract_placeholders;
use crate::segment::PathSegment;
use crate::spec::{ParameterLocation, ParameterMeta, RouteMeta};
use crate::tree::NodeId;

/// Parameter metadata as far as the builder cares: a name, and whether it
/// documents a path placeholder.
pub trait PathParameter {
    fn name(&self) -> &str;

    fn documents_path(&self) -> bool {
        true
    }
}

impl PathParameter for &str {
    fn name(&self) -> &str {
        self
    }
}

impl PathParameter for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl PathParameter for ParameterMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn documents_path(&self) -> bool {
        self.location == ParameterLocation::Path
    }
}

/// Parameter list for templates without placeholders.
pub const NO_PARAMETERS: &[&str] = &[];

/// Builds a [`UriModel`] one template at a time, reusing nodes for shared prefixes.
///
/// Each registration is all-or-nothing: the template is validated before any
/// node is inserted, so a rejected template leaves the tree unchanged.
#[derive(Debug, Default)]
pub struct UriModelBuilder {
    model: UriModel,
    include_base_path: bool,
}

impl UriModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix routes added through [`add_route`](Self::add_route) with their server base path.
    #[must_use]
    pub fn include_base_path(mut self, include: bool) -> Self {
        self.include_base_path = include;
        self
    }

    /// Register `method` on `template`, creating missing segments.
    ///
    /// Every placeholder must have a matching path parameter in `parameters`.
    /// Returns the segment the operation was attached to.
    pub fn add_template<P: PathParameter>(
        &mut self,
        template: &str,
        method: Method,
        parameters: &[P],
    ) -> Result<NodeId, BuildError> {
        self.insert(template, Operation::new(method), parameters)
            .inspect_err(|err| warn!(template = %template, error = %err, "Template rejected"))
    }

    /// Register a route extracted from an OpenAPI document.
    pub fn add_route(&mut self, route: &RouteMeta) -> Result<NodeId, BuildError> {
        let template = if self.include_base_path {
            route.full_path()
        } else {
            route.path_pattern.clone()
        };
        let mut operation = Operation::new(route.method.clone());
        if let Some(id) = &route.operation_id {
            operation = operation.with_operation_id(id.clone());
        }
        self.insert(&template, operation, &route.parameters)
            .inspect_err(|err| warn!(template = %template, error = %err, "Route rejected"))
    }

    /// Read access to the model under construction.
    #[must_use]
    pub fn model(&self) -> &UriModel {
        &self.model
    }

    #[must_use]
    pub fn build(self) -> UriModel {
        info!(
            segments_count = self.model.segment_count(),
            operations_count = self.model.operation_count(),
            "URI model built"
        );
        self.model
    }

    fn insert<P: PathParameter>(
        &mut self,
        template: &str,
        operation: Operation,
        parameters: &[P],
    ) -> Result<NodeId, BuildError> {
        if !is_supported_method(operation.method()) {
            return Err(BuildError::UnsupportedMethod {
                template: template.to_string(),
                method: operation.method().clone(),
            });
        }

        let values: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();
        for value in &values {
            let (placeholders, _) = extract_placeholders(value);
            for placeholder in &placeholders {
                let documented = parameters
                    .iter()
                    .any(|p| p.documents_path() && p.name() == placeholder.name);
                if !documented {
                    return Err(BuildError::UndocumentedPlaceholder {
                        template: template.to_string(),
                        segment: value.to_string(),
                        placeholder: placeholder.name.clone(),
                    });
                }
            }
        }

        // Compile every segment up front so a bad matcher cannot leave a half-inserted branch
        let mut pending = Vec::with_capacity(values.len());
        for (depth, value) in values.iter().enumerate() {
            let template_path = format!("/{}", values[..=depth].join("/"));
            pending.push(PathSegment::new(*value, template_path)?);
        }

        let mut current = self.model.root();
        for segment in pending {
            current = match self.model.find_child(current, segment.value()) {
                Some(existing) => existing,
                None => self.model.add_child(current, segment),
            };
        }

        let method = operation.method().clone();
        self.model.add_operation(current, operation)?;
        debug!(
            template = %template,
            method = %method,
            segment = %current,
            "Template registered"
        );
        Ok(current)
    }
}

impl UriModel {
    /// Build a model from extracted routes, stopping at the first error.
    pub fn from_routes(routes: &[RouteMeta]) -> Result<Self, BuildError> {
        Self::from_routes_with(routes, false)
    }

    /// Like [`from_routes`](Self::from_routes), optionally prefixing each
    /// template with its server base path.
    pub fn from_routes_with(routes: &[RouteMeta], include_base_path: bool) -> Result<Self, BuildError> {
        let mut builder = UriModelBuilder::new().include_base_path(include_base_path);
        for route in routes {
            builder.add_route(route)?;
        }
        Ok(builder.build())
    }
}
