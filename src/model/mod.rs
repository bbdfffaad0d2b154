//! # Model Module
//!
//! [`UriModel`] owns the segment tree built from an API's template paths and
//! answers every structural question about it.
//!
//! ## Overview
//!
//! The model is responsible for:
//! - Mapping a literal request path onto the chain of matching segments
//! - Reconstructing literal paths from placeholder values
//! - Classifying segments as single-resource or collection endpoints
//! - Locating the nearest operation-bearing ancestor or descendants
//! - Rendering the tree for diagnostics
//!
//! ## Matching
//!
//! [`UriModel::path_segments_by_stable_uri_path`] walks one level per path
//! component. At each level static children win over variable children; among
//! children of the same kind the first declared one wins. There is no
//! backtracking: once a child is chosen the walk continues below it or fails.
//!
//! ```rust
//! use uritree::builder::NO_PARAMETERS;
//! use uritree::{UriModel, UriModelBuilder};
//! use http::Method;
//!
//! let mut builder = UriModelBuilder::new();
//! builder.add_template("/user", Method::GET, NO_PARAMETERS).unwrap();
//! builder.add_template("/user/account", Method::GET, NO_PARAMETERS).unwrap();
//! builder.add_template("/user/account/{id}", Method::GET, &["id"]).unwrap();
//! let model = builder.build();
//!
//! let chain = model.path_segments_by_stable_uri_path("/user/account/4");
//! let values: Vec<_> = chain.iter().map(|m| m.value.as_str()).collect();
//! assert_eq!(values, vec!["", "user", "account", "4"]);
//! assert_eq!(UriModel::full_path(&chain), "/user/account/4");
//! ```
//!
//! ## Concurrency
//!
//! All queries take `&self`. Once built the model can be shared across
//! threads behind an `Arc`; mutation needs `&mut self` and therefore
//! exclusive access.

mod classify;
mod core;
mod render;

pub use self::core::{ParamVec, SegmentMatch, SegmentMatchView, UriModel, MAX_INLINE_PARAMS};
pub use classify::{Allocation, ResourceEndpointType};
pub use render::RenderStyle;
