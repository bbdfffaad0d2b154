//! # CLI Module
//!
//! Command-line access to the URI model of an OpenAPI document.
//!
//! ## Commands
//!
//! ### `tree`
//!
//! Print the segment tree with the methods of each segment:
//!
//! ```bash
//! uritree tree --spec openapi.yaml
//! uritree tree --spec openapi.yaml --ascii
//! ```
//!
//! ### `match`
//!
//! Map a literal path onto the tree and show the template, endpoint type and
//! captured placeholder values:
//!
//! ```bash
//! uritree match --spec openapi.yaml /users/42/posts --json
//! ```
//!
//! ### `query`
//!
//! List segments passing every given filter:
//!
//! ```bash
//! uritree query --spec openapi.yaml --variable --method GET
//! uritree query --spec openapi.yaml --endpoint one
//! ```
//!
//! ### `resolve`
//!
//! Substitute placeholder values into a registered template:
//!
//! ```bash
//! uritree resolve --spec openapi.yaml --template '/users/{id}/posts' --set id=42
//! ```
//!
//! All commands accept `--base-path` to prefix templates with the first
//! server URL's path. Logs go to stderr, reports to stdout.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, load_model, run_cli, Cli, Commands, SpecArgs};
