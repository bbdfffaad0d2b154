//! # Runtime Configuration Module
//!
//! Environment variable-based options for the `uritree` binary.
//!
//! ## Environment Variables
//!
//! ### `URITREE_RENDER_STYLE`
//!
//! Glyph set used by `uritree tree`: `unicode` (box drawing) or `ascii`.
//!
//! Default: `unicode`
//!
//! ### `URITREE_INCLUDE_BASE_PATH`
//!
//! When `true`, every template is prefixed with the path of the document's
//! first `servers` URL, so `/pets` under `https://api.example.com/v1` is
//! registered as `/v1/pets`.
//!
//! Default: `false`
//!
//! ## Usage
//!
//! ```rust
//! use uritree::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Render style: {:?}", config.render_style);
//! ```
//!
//! Command line flags take precedence over these values.

use std::env;

use crate::model::RenderStyle;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Glyph set for tree rendering (default: unicode)
    pub render_style: RenderStyle,
    /// Prefix templates with the server base path (default: false)
    pub include_base_path: bool,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let render_style = lookup("URITREE_RENDER_STYLE")
            .map(|v| RenderStyle::parse(&v))
            .unwrap_or_default();
        let include_base_path = lookup("URITREE_INCLUDE_BASE_PATH")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);
        RuntimeConfig {
            render_style,
            include_base_path,
        }
    }
}

pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
