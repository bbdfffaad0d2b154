use std::fmt;

use super::traverse::{self, Traversable};

/// Handle to a node stored in a [`Tree`].
///
/// Handles are only meaningful for the tree that issued them. Passing a
/// handle from another tree is a logic error and may panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node inside the arena.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node<V> {
    value: V,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed tree with exclusively owned children and non-owning parent links.
#[derive(Debug, Clone)]
pub struct Tree<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tree<V> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a node with no parent.
    ///
    /// A tree may hold several roots; nodes under different roots are
    /// disconnected from each other.
    pub fn add_root(&mut self, value: V) -> NodeId {
        self.push(value, None)
    }

    /// Create a node and append it to `parent`'s children.
    ///
    /// The child list and the back-reference are updated in the same call.
    pub fn add_child(&mut self, parent: NodeId, value: V) -> NodeId {
        let id = self.push(value, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Detach `child` from `parent`.
    ///
    /// Returns `false` when `child` is not a direct child of `parent`. The
    /// detached node keeps its own subtree and becomes a root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.0].children;
        let Some(pos) = children.iter().position(|c| *c == child) else {
            return false;
        };
        children.remove(pos);
        self.nodes[child.0].parent = None;
        true
    }

    /// Detach every child of `parent`, clearing each back-reference.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    #[inline]
    #[must_use]
    pub fn value(&self, id: NodeId) -> &V {
        &self.nodes[id.0].value
    }

    #[inline]
    pub fn value_mut(&mut self, id: NodeId) -> &mut V {
        &mut self.nodes[id.0].value
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// `true` if `id` was issued by this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Number of nodes in the arena, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id`'s parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, V> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Nodes of the subtree rooted at `id` in pre-order, `id` first.
    #[must_use]
    pub fn descendants_preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Upward walk via parent links.
    #[must_use]
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    #[must_use]
    pub fn is_child_of(&self, id: NodeId, parent: NodeId) -> bool {
        self.parent(id) == Some(parent)
    }

    /// Downward search through `id`'s subtree.
    #[must_use]
    pub fn is_ancestor_of(&self, id: NodeId, descendant: NodeId) -> bool {
        self.children(id)
            .iter()
            .any(|c| *c == descendant || self.is_ancestor_of(*c, descendant))
    }

    #[must_use]
    pub fn is_parent_of(&self, id: NodeId, child: NodeId) -> bool {
        self.children(id).contains(&child)
    }

    /// Longest edge count from `id` down to a leaf. Leaves have height 0.
    #[must_use]
    pub fn height(&self, id: NodeId) -> usize {
        self.children(id)
            .iter()
            .map(|c| self.height(*c) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of edges between `from` and `to`.
    ///
    /// `None` stands for the classic `-1` "no path" result and only occurs
    /// when the nodes are not connected.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<usize> {
        traverse::distance(self, from, to)
    }

    /// Node sequence from `to` back to `from`, or `None` when they are not connected.
    #[must_use]
    pub fn path_between(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        traverse::path_between(self, from, to)
    }

    fn push(&mut self, value: V, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            parent,
            children: Vec::new(),
        });
        id
    }
}

impl<V> Traversable for Tree<V> {
    type Node = NodeId;

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.children(node)
    }
}

/// Iterator over the ancestors of a node, nearest first.
pub struct Ancestors<'a, V> {
    tree: &'a Tree<V>,
    next: Option<NodeId>,
}

impl<V> Iterator for Ancestors<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
