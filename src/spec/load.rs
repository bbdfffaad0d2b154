use super::build::build_routes;
use super::types::RouteMeta;
use anyhow::Context;
use oas3::OpenApiV3Spec;
use std::path::Path;
use tracing::info;

const METHODS: [&str; 8] = ["get", "post", "put", "delete", "patch", "options", "head", "trace"];

/// Drop path-item keys that are neither known fields, HTTP verbs nor `x-` extensions.
fn strip_unknown_verbs(val: &mut serde_json::Value) {
    let Some(serde_json::Value::Object(paths_map)) = val.get_mut("paths") else {
        return;
    };
    for item in paths_map.values_mut() {
        if let serde_json::Value::Object(obj) = item {
            obj.retain(|k, _| {
                let lk = k.to_ascii_lowercase();
                match lk.as_str() {
                    "summary" | "description" | "servers" | "parameters" | "$ref" => true,
                    m if METHODS.contains(&m) => true,
                    _ => k.starts_with("x-"),
                }
            });
        }
    }
}

/// Source document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    /// `.yaml` / `.yml` are YAML, anything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => SpecFormat::Yaml,
            _ => SpecFormat::Json,
        }
    }
}

/// Parse an OpenAPI document held in memory.
pub fn parse_spec_str(content: &str, format: SpecFormat) -> anyhow::Result<OpenApiV3Spec> {
    let mut value: serde_json::Value = match format {
        SpecFormat::Yaml => serde_yaml::from_str(content).context("Invalid YAML document")?,
        SpecFormat::Json => serde_json::from_str(content).context("Invalid JSON document")?,
    };
    strip_unknown_verbs(&mut value);
    let spec: OpenApiV3Spec =
        serde_json::from_value(value).context("Document is not a valid OpenAPI 3 specification")?;
    Ok(spec)
}

/// Load an OpenAPI document from disk and extract its routes.
pub fn load_spec(file_path: impl AsRef<Path>) -> anyhow::Result<Vec<RouteMeta>> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read spec file {}", file_path.display()))?;
    let spec = parse_spec_str(&content, SpecFormat::from_path(file_path))
        .with_context(|| format!("Failed to parse spec file {}", file_path.display()))?;
    let routes = load_spec_from_spec(&spec);
    info!(
        spec = %file_path.display(),
        title = %spec.info.title,
        routes_count = routes.len(),
        "Spec loaded"
    );
    Ok(routes)
}

/// Build route metadata from an already parsed [`OpenApiV3Spec`].
pub fn load_spec_from_spec(spec: &OpenApiV3Spec) -> Vec<RouteMeta> {
    build_routes(spec)
}
