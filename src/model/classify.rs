use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use super::core::UriModel;
use crate::tree::NodeId;

/// Whether a segment stands for no resource, a single resource or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceEndpointType {
    /// No operation attached
    None,
    /// Operations attached and every segment up to the root is static
    One,
    /// Operations attached and some segment up to the root is variable
    Multiple,
}

impl fmt::Display for ResourceEndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceEndpointType::None => write!(f, "none"),
            ResourceEndpointType::One => write!(f, "one"),
            ResourceEndpointType::Multiple => write!(f, "multiple"),
        }
    }
}

impl FromStr for ResourceEndpointType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ResourceEndpointType::None),
            "one" => Ok(ResourceEndpointType::One),
            "multiple" => Ok(ResourceEndpointType::Multiple),
            other => Err(format!(
                "unknown endpoint type '{other}', expected none, one or multiple"
            )),
        }
    }
}

/// Set of variable segments to treat as already bound to concrete values.
///
/// Passed explicitly into classification calls instead of toggling state on
/// the segments themselves, so the same model can be classified under
/// several substitutions at once.
///
/// ```rust
/// use uritree::model::{Allocation, ResourceEndpointType};
/// use uritree::UriModelBuilder;
/// use http::Method;
///
/// let mut builder = UriModelBuilder::new();
/// let id = builder.add_template("/users/{id}", Method::GET, &["id"]).unwrap();
/// let model = builder.build();
///
/// assert_eq!(model.resource_endpoint_type(id), ResourceEndpointType::Multiple);
/// let bound = Allocation::new().with(id);
/// assert_eq!(model.resource_endpoint_type_in(id, &bound), ResourceEndpointType::One);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    nodes: HashSet<NodeId>,
}

impl Allocation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocation covering every node that has a supplied value.
    #[must_use]
    pub fn from_values(values: &HashMap<NodeId, String>) -> Self {
        values.keys().copied().collect()
    }

    #[must_use]
    pub fn with(mut self, id: NodeId) -> Self {
        self.nodes.insert(id);
        self
    }

    pub fn allocate(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    /// Returns `true` if the node was allocated.
    pub fn release(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<NodeId> for Allocation {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl UriModel {
    /// `true` if the segment has placeholders and is not covered by `allocation`.
    #[must_use]
    pub fn is_variable_in(&self, id: NodeId, allocation: &Allocation) -> bool {
        self.segment(id).is_variable() && !allocation.contains(id)
    }

    #[must_use]
    pub fn resource_endpoint_type(&self, id: NodeId) -> ResourceEndpointType {
        self.resource_endpoint_type_in(id, &Allocation::default())
    }

    /// Classify `id` under a placeholder allocation.
    #[must_use]
    pub fn resource_endpoint_type_in(
        &self,
        id: NodeId,
        allocation: &Allocation,
    ) -> ResourceEndpointType {
        if !self.segment(id).has_operations() {
            return ResourceEndpointType::None;
        }
        let variable_on_path = std::iter::once(id)
            .chain(self.tree().ancestors(id))
            .any(|n| self.is_variable_in(n, allocation));
        if variable_on_path {
            ResourceEndpointType::Multiple
        } else {
            ResourceEndpointType::One
        }
    }

    #[must_use]
    pub fn is_resource_endpoint(&self, id: NodeId) -> bool {
        self.resource_endpoint_type(id) != ResourceEndpointType::None
    }

    /// Nearest ancestor carrying at least one operation.
    #[must_use]
    pub fn next_ancestor_with_operations(&self, id: NodeId) -> Option<NodeId> {
        self.tree()
            .ancestors(id)
            .find(|a| self.segment(*a).has_operations())
    }

    /// Nearest operation-bearing segments below `id`, one per descent branch.
    ///
    /// A child with operations ends its branch; a child without them
    /// contributes its own nearest operative descendants.
    #[must_use]
    pub fn next_descendants_with_operations(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for child in self.children(id) {
            if self.segment(*child).has_operations() {
                out.push(*child);
            } else {
                out.extend(self.next_descendants_with_operations(*child));
            }
        }
        out
    }
}
