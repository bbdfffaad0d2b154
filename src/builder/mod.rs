//! # Builder Module
//!
//! Populates a [`UriModel`](crate::model::UriModel) from template paths.
//!
//! Templates are split on `/` and inserted segment by segment. A segment whose
//! raw value already exists under the current parent is reused, so
//! `/users`, `/users/{id}` and `/users/{id}/posts` share their prefix nodes.
//!
//! Registration fails with a [`BuildError`](crate::error::BuildError) when:
//! - the method is not one of the eight supported verbs
//! - a placeholder has no matching path parameter
//! - the target segment already has an operation for the method
//!
//! ```rust
//! use uritree::builder::{UriModelBuilder, NO_PARAMETERS};
//! use uritree::error::BuildError;
//! use http::Method;
//!
//! let mut builder = UriModelBuilder::new();
//! builder.add_template("/pets", Method::GET, NO_PARAMETERS).unwrap();
//! builder.add_template("/pets/{petId}", Method::GET, &["petId"]).unwrap();
//!
//! let err = builder.add_template("/pets", Method::GET, NO_PARAMETERS).unwrap_err();
//! assert!(matches!(err, BuildError::DuplicateOperation { .. }));
//!
//! let err = builder.add_template("/owners/{ownerId}", Method::GET, NO_PARAMETERS).unwrap_err();
//! assert!(matches!(err, BuildError::UndocumentedPlaceholder { .. }));
//! ```

mod core;

pub use self::core::{PathParameter, UriModelBuilder, NO_PARAMETERS};
