use super::types::{ParameterLocation, ParameterMeta, RouteMeta};
use oas3::spec::{ObjectOrReference, Parameter};
use oas3::OpenApiV3Spec;
use tracing::warn;

fn resolve_parameter_ref<'a>(
    spec: &'a OpenApiV3Spec,
    ref_path: &str,
) -> Option<&'a oas3::spec::Parameter> {
    if let Some(name) = ref_path.strip_prefix("#/components/parameters/") {
        spec.components
            .as_ref()?
            .parameters
            .get(name)
            .and_then(|param_ref| match param_ref {
                ObjectOrReference::Object(param) => Some(param),
                _ => None,
            })
    } else {
        None
    }
}

/// Extract parameter metadata from a parameter list
///
/// Resolves `#/components/parameters/*` references. References that cannot be
/// resolved are skipped with a warning; a placeholder they were meant to
/// document is then reported by the model builder.
pub fn extract_parameters(
    spec: &OpenApiV3Spec,
    params: &[ObjectOrReference<Parameter>],
) -> Vec<ParameterMeta> {
    let mut out = Vec::new();
    for p in params {
        let param = match p {
            ObjectOrReference::Object(obj) => Some(obj),
            ObjectOrReference::Ref { ref_path, .. } => {
                let resolved = resolve_parameter_ref(spec, ref_path);
                if resolved.is_none() {
                    warn!(ref_path = %ref_path, "Unresolved parameter reference");
                }
                resolved
            }
        };

        if let Some(param) = param {
            out.push(ParameterMeta {
                name: param.name.clone(),
                location: ParameterLocation::from(param.location),
                required: param.required.unwrap_or(false),
            });
        }
    }
    out
}

/// Path component of the first server URL, without a trailing slash.
///
/// Relative server URLs (`/api/v1`) are accepted. An absent server or a
/// root path yields the empty string.
pub fn extract_base_path(spec: &OpenApiV3Spec) -> String {
    let Some(server) = spec.servers.first() else {
        return String::new();
    };
    let url_str = &server.url;
    url::Url::parse(url_str)
        .or_else(|_| url::Url::parse(&format!("http://dummy{url_str}")))
        .map(|u| {
            let p = u.path().trim_end_matches('/');
            if p == "/" || p.is_empty() {
                String::new()
            } else {
                p.to_string()
            }
        })
        .unwrap_or_default()
}

/// Flatten a parsed document into route triples, one per path and method.
///
/// Path-item parameters come first, operation parameters after them.
pub fn build_routes(spec: &OpenApiV3Spec) -> Vec<RouteMeta> {
    let mut routes = Vec::new();
    let base_path = extract_base_path(spec);

    if let Some(paths_map) = spec.paths.as_ref() {
        for (path, item) in paths_map {
            for (method, operation) in item.methods() {
                let mut parameters = Vec::new();
                parameters.extend(extract_parameters(spec, &item.parameters));
                parameters.extend(extract_parameters(spec, &operation.parameters));

                routes.push(RouteMeta {
                    method: method.clone(),
                    path_pattern: path.clone(),
                    operation_id: operation.operation_id.clone(),
                    parameters,
                    base_path: base_path.clone(),
                });
            }
        }
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> OpenApiV3Spec {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_base_path_from_absolute_server() {
        let spec = parse(
            r#"
openapi: 3.1.0
info: { title: T, version: "1" }
servers:
  - url: https://api.example.com/v2/
paths: {}
"#,
        );
        assert_eq!(extract_base_path(&spec), "/v2");
    }

    #[test]
    fn test_base_path_from_relative_server() {
        let spec = parse(
            r#"
openapi: 3.1.0
info: { title: T, version: "1" }
servers:
  - url: /api/v1
paths: {}
"#,
        );
        assert_eq!(extract_base_path(&spec), "/api/v1");
    }

    #[test]
    fn test_base_path_without_servers() {
        let spec = parse(
            r#"
openapi: 3.1.0
info: { title: T, version: "1" }
paths: {}
"#,
        );
        assert_eq!(extract_base_path(&spec), "");
    }

    #[test]
    fn test_parameters_are_merged_and_resolved() {
        let spec = parse(
            r#"
openapi: 3.1.0
info: { title: T, version: "1" }
components:
  parameters:
    IdParam:
      name: id
      in: path
      required: true
      schema: { type: string }
paths:
  /items/{id}:
    parameters:
      - $ref: '#/components/parameters/IdParam'
    get:
      operationId: get_item
      parameters:
        - name: verbose
          in: query
          schema: { type: boolean }
      responses:
        "200": { description: OK }
"#,
        );
        let routes = build_routes(&spec);
        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.path_pattern, "/items/{id}");
        assert_eq!(route.operation_id.as_deref(), Some("get_item"));
        assert_eq!(route.parameters.len(), 2);
        assert_eq!(route.parameters[0], ParameterMeta::path("id"));
        assert_eq!(route.parameters[1].location, ParameterLocation::Query);
        assert!(!route.parameters[1].required);
    }
}
