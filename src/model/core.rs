use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

use crate::error::BuildError;
use crate::operation::Operation;
use crate::segment::PathSegment;
use crate::tree::{NodeId, Tree};

/// Maximum number of captured placeholder values before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Captured `(placeholder name, literal value)` pairs, root to leaf order.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// A segment on a mapped path together with the literal value it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentMatch {
    /// Matched segment
    pub segment: NodeId,
    /// Literal value for this segment; empty for the root
    pub value: String,
}

impl SegmentMatch {
    pub fn new(segment: NodeId, value: impl Into<String>) -> Self {
        Self {
            segment,
            value: value.into(),
        }
    }
}

/// Serializable view of a [`SegmentMatch`], resolved against its model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentMatchView {
    pub template: String,
    pub value: String,
    pub methods: Vec<String>,
}

/// Tree model of an API's URI space.
///
/// Owns exactly one root segment standing for `/`. Every other segment is
/// reachable only through the root.
#[derive(Debug, Clone)]
pub struct UriModel {
    tree: Tree<PathSegment>,
    root: NodeId,
}

impl Default for UriModel {
    fn default() -> Self {
        Self::new()
    }
}

impl UriModel {
    /// Create a model holding only the root segment.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Tree::new();
        let root = tree.add_root(PathSegment::root());
        Self { tree, root }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn tree(&self) -> &Tree<PathSegment> {
        &self.tree
    }

    #[inline]
    #[must_use]
    pub fn segment(&self, id: NodeId) -> &PathSegment {
        self.tree.value(id)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// Append `segment` under `parent`.
    pub fn add_child(&mut self, parent: NodeId, segment: PathSegment) -> NodeId {
        self.tree.add_child(parent, segment)
    }

    /// Attach an operation to a segment; fails on a duplicate method.
    pub fn add_operation(&mut self, id: NodeId, operation: Operation) -> Result<(), BuildError> {
        self.tree.value_mut(id).add_operation(operation)
    }

    /// Prune `child` from `parent`. The pruned subtree is no longer reachable from the root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.tree.remove_child(parent, child)
    }

    pub fn clear_children(&mut self, parent: NodeId) {
        self.tree.clear_children(parent);
    }

    /// Child of `parent` whose raw template value is exactly `value`.
    #[must_use]
    pub fn find_child(&self, parent: NodeId, value: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|c| self.segment(*c).value() == value)
    }

    /// Segment registered for an exact template path such as `/users/{id}`.
    #[must_use]
    pub fn find_template(&self, template: &str) -> Option<NodeId> {
        template
            .split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self.root, |current, value| self.find_child(current, value))
    }

    /// Every segment reachable from the root, in pre-order, root first.
    #[must_use]
    pub fn segments(&self) -> Vec<NodeId> {
        self.tree.descendants_preorder(self.root)
    }

    /// Number of segments reachable from the root, root included.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments().len()
    }

    /// Number of operations attached to reachable segments.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.segments()
            .into_iter()
            .map(|id| self.segment(id).operations().len())
            .sum()
    }

    /// Root-to-`target` node sequence.
    ///
    /// Empty when `target` has been pruned away from the root.
    #[must_use]
    pub fn path_segments_by_last_path_segment(&self, target: NodeId) -> Vec<NodeId> {
        self.tree
            .path_between(target, self.root)
            .unwrap_or_default()
    }

    /// Map a literal request path onto the tree.
    ///
    /// Components are split on `/` with empty components discarded. At each
    /// level static children are tried first, in declaration order, then
    /// variable children in declaration order; the first match wins and is
    /// never revisited. The result starts with the root paired with an empty
    /// value. An unmappable path yields an empty `Vec`.
    #[must_use]
    pub fn path_segments_by_stable_uri_path(&self, path: &str) -> Vec<SegmentMatch> {
        let path = strip_query(path);
        let mut matched = vec![SegmentMatch::new(self.root, "")];
        let mut current = self.root;

        for component in path.split('/').filter(|c| !c.is_empty()) {
            let Some(next) = self.match_child(current, component) else {
                debug!(
                    path = %path,
                    component = %component,
                    parent = %self.segment(current).template_path(),
                    "Stable path not mapped"
                );
                return Vec::new();
            };
            matched.push(SegmentMatch::new(next, component));
            current = next;
        }

        debug!(
            path = %path,
            template = %self.segment(current).template_path(),
            depth = matched.len() - 1,
            "Stable path mapped"
        );
        matched
    }

    /// Last segment of [`path_segments_by_stable_uri_path`](Self::path_segments_by_stable_uri_path).
    #[must_use]
    pub fn last_path_segment_by_stable_uri_path(&self, path: &str) -> Option<SegmentMatch> {
        self.path_segments_by_stable_uri_path(path).pop()
    }

    /// Placeholder values bound by mapping `path`, root to leaf.
    ///
    /// `None` when the path cannot be mapped.
    #[must_use]
    pub fn capture_path_values(&self, path: &str) -> Option<ParamVec> {
        let matched = self.path_segments_by_stable_uri_path(path);
        if matched.is_empty() {
            return None;
        }
        let mut params = ParamVec::new();
        for m in &matched {
            let segment = self.segment(m.segment);
            if segment.is_static() {
                continue;
            }
            let mut values: Vec<_> = segment
                .capture_placeholder_values(&m.value)?
                .into_iter()
                .collect();
            values.sort_by_key(|(p, _)| p.index);
            params.extend(values.into_iter().map(|(p, v)| (p.name, v)));
        }
        Some(params)
    }

    /// Literal segment chain from the root to `target` using supplied values.
    ///
    /// For each node a value from `values` wins, a static node falls back to
    /// its own template value (the root to the empty string), and a variable
    /// node without a supplied value makes the whole call return an empty
    /// `Vec`.
    #[must_use]
    pub fn path_segments_by_stable_path_segments(
        &self,
        target: NodeId,
        values: &HashMap<NodeId, String>,
    ) -> Vec<SegmentMatch> {
        let chain = self.path_segments_by_last_path_segment(target);
        let mut out = Vec::with_capacity(chain.len());
        for id in chain {
            let segment = self.segment(id);
            let value = match values.get(&id) {
                Some(value) => value.clone(),
                None if segment.is_static() => segment.value().to_string(),
                None => {
                    debug!(
                        template = %segment.template_path(),
                        "Missing substitution value for variable segment"
                    );
                    return Vec::new();
                }
            };
            out.push(SegmentMatch::new(id, value));
        }
        out
    }

    /// Join non-blank segment values with `/` behind a leading slash.
    ///
    /// `["", "user", "", "account"]` becomes `/user/account`; input with no
    /// non-blank value becomes `/`.
    #[must_use]
    pub fn build_full_path<S: AsRef<str>>(values: &[S]) -> String {
        let parts: Vec<&str> = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !v.trim().is_empty())
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// [`build_full_path`](Self::build_full_path) over a segment chain.
    #[must_use]
    pub fn full_path(matches: &[SegmentMatch]) -> String {
        let values: Vec<&str> = matches.iter().map(|m| m.value.as_str()).collect();
        Self::build_full_path(&values)
    }

    /// Resolve a match chain into owned, serializable records.
    #[must_use]
    pub fn describe(&self, matches: &[SegmentMatch]) -> Vec<SegmentMatchView> {
        matches
            .iter()
            .map(|m| {
                let segment = self.segment(m.segment);
                SegmentMatchView {
                    template: segment.template_path().to_string(),
                    value: m.value.clone(),
                    methods: segment.methods().map(ToString::to_string).collect(),
                }
            })
            .collect()
    }

    fn match_child(&self, parent: NodeId, component: &str) -> Option<NodeId> {
        let children = self.children(parent);
        let first_match = |want_static: bool| {
            children.iter().copied().find(|c| {
                let segment = self.segment(*c);
                segment.is_static() == want_static && segment.matches_stable_path_segment(component)
            })
        };
        first_match(true).or_else(|| first_match(false))
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
