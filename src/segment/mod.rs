//! # Segment Module
//!
//! [`PathSegment`] is the payload of every node in the URI model: one
//! `/`-delimited component of a template path such as `{id}` or
//! `account{suffix}`.
//!
//! ## Matching
//!
//! Each segment compiles its template value into an anchored regex once, at
//! construction:
//!
//! 1. Placeholders split the value into static fragments
//! 2. Fragments are lowercased and escaped
//! 3. A greedy one-or-more capture is injected between adjacent fragments
//! 4. The pattern is anchored at both ends
//!
//! Literal segments are lowercased before matching, so static text compares
//! case-insensitively. Captured values are sliced from the literal as given.
//!
//! ```rust
//! use uritree::segment::PathSegment;
//!
//! let seg = PathSegment::new("a{x}:{y}b", "/a{x}:{y}b").unwrap();
//! assert!(seg.matches_stable_path_segment("A1:2B"));
//! assert!(!seg.matches_stable_path_segment("a:b"));
//!
//! let values = seg.assign([("x", "7"), ("y", "9")]);
//! assert_eq!(seg.build_stable_path_segment(&values), "a7:9b");
//! ```

mod core;
mod matcher;

pub use self::core::PathSegment;
pub use matcher::segment_pattern;
