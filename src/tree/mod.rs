//! # Tree Module
//!
//! Generic, arena-backed tree used as the backbone of the URI model.
//!
//! ## Overview
//!
//! Every node lives in a single `Vec` owned by [`Tree`]. A parent owns its
//! children through an ordered list of [`NodeId`] handles; the child keeps a
//! non-owning `parent` handle that is only ever used for upward walks. Because
//! handles are plain indices there is no reference cycle and no shared
//! ownership anywhere in the structure.
//!
//! Mutation goes through [`Tree::add_child`], [`Tree::remove_child`] and
//! [`Tree::clear_children`], which update the child list and the parent
//! handle together. A detached node stays in the arena as the root of its own
//! (now disconnected) subtree.
//!
//! ## Traversal
//!
//! [`Traversable`] exposes "parent of" and "children of" for any graph-like
//! structure. [`distance`] and [`path_between`] are written once against that
//! trait and guard every expansion with a visited set, so they terminate on
//! graphs with back-edges as well as on trees.
//!
//! ```rust
//! use uritree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.add_root("/");
//! let users = tree.add_child(root, "users");
//! let id = tree.add_child(users, "{id}");
//!
//! assert!(tree.is_descendant_of(id, root));
//! assert_eq!(tree.distance(root, id), Some(2));
//! assert_eq!(tree.path_between(id, root), Some(vec![root, users, id]));
//! ```

mod core;
mod traverse;

pub use self::core::{Ancestors, NodeId, Tree};
pub use traverse::{distance, path_between, Traversable};
