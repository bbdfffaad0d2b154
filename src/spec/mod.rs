//! # Spec Module
//!
//! Glue between OpenAPI documents (parsed by `oas3`) and the model builder.
//!
//! Each path/method pair of the document becomes one [`RouteMeta`]: the
//! template path, the HTTP method, the `operationId` and the merged
//! path-item and operation parameters. [`UriModel::from_routes`] turns the
//! list into a tree.
//!
//! [`UriModel::from_routes`]: crate::model::UriModel::from_routes

mod build;
mod load;
mod types;

pub use build::{build_routes, extract_base_path, extract_parameters};
pub use load::{load_spec, load_spec_from_spec, parse_spec_str, SpecFormat};
pub use types::{ParameterLocation, ParameterMeta, RouteMeta};
