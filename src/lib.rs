//! # uritree
//!
//! **uritree** models the URI space of an [OpenAPI 3.1.0](https://spec.openapis.org/oas/v3.1.0)
//! document as a tree of path segments and answers structural questions about it.
//!
//! ## Overview
//!
//! Every template path of the document (`/users/{id}/posts`) is split on `/`
//! and inserted into a single-rooted tree. Shared prefixes share nodes, and
//! each node carries the operations registered for its template path. On top
//! of the tree the crate provides:
//!
//! - Literal path mapping: `/users/42/posts` to the segment chain of `/users/{id}/posts`
//! - Placeholder capture and substitution in both directions
//! - Endpoint classification: single resource, collection, or none
//! - Composable segment queries
//! - A diagnostic tree rendering and a small command line tool
//!
//! ## Architecture
//!
//! - **[`tree`]** - Arena tree with non-owning parent links and generic BFS traversal
//! - **[`placeholder`]** - `{name}` extraction and ordinal markers
//! - **[`segment`]** - One template segment: matcher, placeholders, operations
//! - **[`model`]** - The segment tree and every algorithm over it
//! - **[`query`]** - Filter chains and predicates over segments
//! - **[`builder`]** - Validating, all-or-nothing template registration
//! - **[`spec`]** - OpenAPI loading with `oas3`
//! - **[`logging`]** / **[`runtime_config`]** - Environment-driven setup
//! - **[`cli`]** - The `uritree` binary
//!
//! ### Build and Match Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant Spec as spec::load_spec
//!     participant Builder as UriModelBuilder
//!     participant Model as UriModel
//!
//!     User->>Spec: load_spec("openapi.yaml")
//!     Spec->>Spec: Parse YAML/JSON, resolve parameter refs
//!     Spec-->>User: Vec<RouteMeta>
//!     User->>Builder: add_route(route) per route
//!     Builder->>Builder: Check placeholders are documented
//!     Builder->>Model: Insert or reuse segments, attach operation
//!     Builder-->>User: UriModel
//!     User->>Model: path_segments_by_stable_uri_path("/users/42")
//!     Model->>Model: Static children first, then variable, no backtracking
//!     Model-->>User: Vec<SegmentMatch>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use uritree::{ResourceEndpointType, UriModelBuilder, NO_PARAMETERS};
//!
//! let mut builder = UriModelBuilder::new();
//! builder.add_template("/pets", Method::GET, NO_PARAMETERS).unwrap();
//! let pet = builder.add_template("/pets/{petId}", Method::GET, &["petId"]).unwrap();
//! let model = builder.build();
//!
//! let params = model.capture_path_values("/pets/42").unwrap();
//! assert_eq!(params[0], ("petId".to_string(), "42".to_string()));
//! assert_eq!(model.resource_endpoint_type(pet), ResourceEndpointType::Multiple);
//! ```
//!
//! From an OpenAPI document on disk:
//!
//! ```no_run
//! use uritree::{load_spec, UriModel};
//!
//! let routes = load_spec("openapi.yaml")?;
//! let model = UriModel::from_routes(&routes)?;
//! println!("{model}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod builder;
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod operation;
pub mod placeholder;
pub mod query;
pub mod runtime_config;
pub mod segment;
pub mod spec;
pub mod tree;

pub use builder::{PathParameter, UriModelBuilder, NO_PARAMETERS};
pub use error::BuildError;
pub use model::{
    Allocation, ParamVec, RenderStyle, ResourceEndpointType, SegmentMatch, UriModel,
};
pub use operation::Operation;
pub use placeholder::Placeholder;
pub use query::{Predicate, Query};
pub use segment::PathSegment;
pub use spec::{load_spec, load_spec_from_spec, ParameterLocation, ParameterMeta, RouteMeta};
pub use tree::NodeId;
