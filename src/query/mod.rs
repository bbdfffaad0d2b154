//! # Query Module
//!
//! Filter chains over a model's segments.
//!
//! A [`Query`] starts from [`UriModel::query`](crate::UriModel::query) and is
//! narrowed by filters such as [`Query::is_variable`] or
//! [`Query::has_operation`]. Filters can also be expressed as a
//! [`Predicate`] value and applied in one go with [`Query::matching`]:
//!
//! ```rust
//! use http::Method;
//! use uritree::query::Predicate;
//! use uritree::builder::{UriModelBuilder, NO_PARAMETERS};
//!
//! let mut builder = UriModelBuilder::new();
//! builder.add_template("/users", Method::GET, NO_PARAMETERS).unwrap();
//! builder.add_template("/users/{id}", Method::GET, &["id"]).unwrap();
//! let model = builder.build();
//!
//! let chained = model.query().is_variable().has_operation(Method::GET);
//! let combined = model
//!     .query()
//!     .matching(&Predicate::is_variable().and(Predicate::has_operation(Method::GET)));
//! assert_eq!(chained.template_paths(), vec!["/users/{id}"]);
//! assert_eq!(chained.nodes(), combined.nodes());
//! ```

mod core;
mod predicate;
#[cfg(test)]
mod tests;

pub use self::core::Query;
pub use predicate::Predicate;
