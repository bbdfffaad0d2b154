use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand};
use http::Method;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::model::{Allocation, RenderStyle, ResourceEndpointType, SegmentMatchView, UriModel};
use crate::query::Query;
use crate::runtime_config::RuntimeConfig;
use crate::spec::load_spec;
use crate::tree::NodeId;

/// Command-line interface for uritree
///
/// Loads an OpenAPI document, builds its segment tree and answers questions about it.
#[derive(Parser, Debug)]
#[command(name = "uritree")]
#[command(version, about = "Inspect the URI space of an OpenAPI document", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that loads a document
#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Path to the OpenAPI specification file (YAML or JSON)
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Prefix templates with the path of the first server URL
    #[arg(long, default_value_t = false)]
    pub base_path: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the segment tree with the methods of each segment
    Tree {
        #[command(flatten)]
        spec: SpecArgs,

        /// Use ASCII glyphs instead of box drawing characters
        #[arg(long, default_value_t = false)]
        ascii: bool,
    },
    /// Map a literal request path onto the tree
    Match {
        #[command(flatten)]
        spec: SpecArgs,

        /// Literal path such as /users/42/posts
        path: String,

        /// Fail unless the matched segment supports this method
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List segments passing every given filter
    Query {
        #[command(flatten)]
        spec: SpecArgs,

        /// Only segments with unallocated placeholders
        #[arg(long, default_value_t = false, conflicts_with = "static_only")]
        variable: bool,

        /// Only segments without placeholders
        #[arg(long = "static", default_value_t = false)]
        static_only: bool,

        /// Only segments with an operation for this method
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,

        /// Only segments carrying at least one operation
        #[arg(long, default_value_t = false)]
        any_operation: bool,

        /// Only segments of this endpoint type (none, one, multiple)
        #[arg(long)]
        endpoint: Option<ResourceEndpointType>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Substitute placeholder values into a registered template
    Resolve {
        #[command(flatten)]
        spec: SpecArgs,

        /// Template path exactly as registered, e.g. /users/{id}/posts
        #[arg(short, long)]
        template: String,

        /// Placeholder value, repeatable: --set id=42
        #[arg(long = "set", value_parser = parse_key_val)]
        values: Vec<(String, String)>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_bytes(s.to_ascii_uppercase().as_bytes()).map_err(|e| e.to_string())
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("missing placeholder name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Debug, Serialize)]
struct MatchReport {
    path: String,
    template: String,
    endpoint_type: ResourceEndpointType,
    methods: Vec<String>,
    params: Vec<(String, String)>,
    segments: Vec<SegmentMatchView>,
}

#[derive(Debug, Serialize)]
struct SegmentReport {
    template: String,
    variable: bool,
    endpoint_type: ResourceEndpointType,
    methods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    template: String,
    path: String,
    endpoint_type: ResourceEndpointType,
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The OpenAPI spec cannot be loaded or parsed
/// - A template in the spec is rejected by the model builder
/// - A path does not match or a template cannot be resolved
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Run a parsed command, writing its report to `out`.
pub fn execute(cli: &Cli, config: &RuntimeConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Tree { spec, ascii } => {
            let model = load_model(spec, config)?;
            let style = if *ascii {
                RenderStyle::Ascii
            } else {
                config.render_style
            };
            writeln!(out, "{}", model.render(style))?;
        }
        Commands::Match {
            spec,
            path,
            method,
            json,
        } => {
            let model = load_model(spec, config)?;
            let report = match_path(&model, path, method.as_ref())?;
            if *json {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{} -> {}", report.path, report.template)?;
                writeln!(out, "endpoint: {}", report.endpoint_type)?;
                writeln!(out, "methods: {}", report.methods.join(", "))?;
                for (name, value) in &report.params {
                    writeln!(out, "  {name} = {value}")?;
                }
            }
        }
        Commands::Query {
            spec,
            variable,
            static_only,
            method,
            any_operation,
            endpoint,
            json,
        } => {
            let model = load_model(spec, config)?;
            let mut query = model.query();
            if *variable {
                query = query.is_variable();
            }
            if *static_only {
                query = query.is_static();
            }
            if let Some(method) = method {
                query = query.has_operation(method.clone());
            }
            if *any_operation {
                query = query.has_any_operation();
            }
            if let Some(endpoint) = endpoint {
                query = query.is_resource_endpoint_type(*endpoint);
            }
            write_query(&model, &query, *json, out)?;
        }
        Commands::Resolve {
            spec,
            template,
            values,
            json,
        } => {
            let model = load_model(spec, config)?;
            let report = resolve_template(&model, template, values)?;
            if *json {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", report.path)?;
            }
        }
    }
    Ok(())
}

/// Load the document behind `args` and build its model.
pub fn load_model(args: &SpecArgs, config: &RuntimeConfig) -> anyhow::Result<UriModel> {
    let routes = load_spec(&args.spec)?;
    let include_base_path = args.base_path || config.include_base_path;
    let model = UriModel::from_routes_with(&routes, include_base_path)
        .with_context(|| format!("Failed to build URI model from {}", args.spec.display()))?;
    Ok(model)
}

fn match_path(model: &UriModel, path: &str, method: Option<&Method>) -> anyhow::Result<MatchReport> {
    let chain = model.path_segments_by_stable_uri_path(path);
    let last = chain
        .last()
        .ok_or_else(|| anyhow!("No template matches '{path}'"))?;
    let segment = model.segment(last.segment);
    if let Some(method) = method {
        if !segment.supports(method) {
            bail!(
                "'{}' matches '{}' but has no {method} operation",
                path,
                segment.template_path()
            );
        }
    }
    let params = model
        .capture_path_values(path)
        .map(|p| p.into_vec())
        .unwrap_or_default();
    Ok(MatchReport {
        path: UriModel::full_path(&chain),
        template: segment.template_path().to_string(),
        endpoint_type: model.resource_endpoint_type(last.segment),
        methods: segment.methods().map(ToString::to_string).collect(),
        params,
        segments: model.describe(&chain),
    })
}

fn resolve_template(
    model: &UriModel,
    template: &str,
    pairs: &[(String, String)],
) -> anyhow::Result<ResolveReport> {
    let target = model
        .find_template(template)
        .ok_or_else(|| anyhow!("Template '{template}' is not registered"))?;

    let mut values: HashMap<NodeId, String> = HashMap::new();
    for id in model.path_segments_by_last_path_segment(target) {
        let segment = model.segment(id);
        if segment.is_static() {
            continue;
        }
        let assignment = segment.assign(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(missing) = segment
            .placeholders()
            .iter()
            .find(|p| !assignment.contains_key(*p))
        {
            bail!("Missing value for placeholder '{}' in '{}'", missing.name, segment.value());
        }
        values.insert(id, segment.build_stable_path_segment(&assignment));
    }

    let chain = model.path_segments_by_stable_path_segments(target, &values);
    let allocation = Allocation::from_values(&values);
    debug!(template = %template, allocated = values.len(), "Template resolved");
    Ok(ResolveReport {
        template: template.to_string(),
        path: UriModel::full_path(&chain),
        endpoint_type: model.resource_endpoint_type_in(target, &allocation),
    })
}

fn write_query(
    model: &UriModel,
    query: &Query<'_>,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if !json {
        for template in query.template_paths() {
            writeln!(out, "{template}")?;
        }
        return Ok(());
    }
    let reports: Vec<SegmentReport> = query
        .iter()
        .map(|id| {
            let segment = model.segment(id);
            SegmentReport {
                template: segment.template_path().to_string(),
                variable: model.is_variable_in(id, query.allocation()),
                endpoint_type: model.resource_endpoint_type_in(id, query.allocation()),
                methods: segment.methods().map(ToString::to_string).collect(),
            }
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)?;
    Ok(())
}
