use http::Method;

use super::predicate::Predicate;
use crate::model::{Allocation, ResourceEndpointType, UriModel};
use crate::tree::NodeId;

/// Ordered, immutable selection of segments from one model.
///
/// Every filter returns a new query holding the surviving segments in their
/// original order; the receiver is left untouched.
#[derive(Debug, Clone)]
pub struct Query<'m> {
    model: &'m UriModel,
    allocation: Allocation,
    nodes: Vec<NodeId>,
}

impl<'m> Query<'m> {
    /// Query over an explicit node list.
    pub fn new(model: &'m UriModel, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            model,
            allocation: Allocation::default(),
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Evaluate later filters under `allocation`.
    #[must_use]
    pub fn with_allocation(&self, allocation: Allocation) -> Self {
        Self {
            model: self.model,
            allocation,
            nodes: self.nodes.clone(),
        }
    }

    #[must_use]
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    #[must_use]
    pub fn model(&self) -> &'m UriModel {
        self.model
    }

    /// Keep the segments satisfying `predicate`.
    #[must_use]
    pub fn matching(&self, predicate: &Predicate) -> Self {
        let nodes = self
            .nodes
            .iter()
            .copied()
            .filter(|id| predicate.evaluate(self.model, &self.allocation, *id))
            .collect();
        Self {
            model: self.model,
            allocation: self.allocation.clone(),
            nodes,
        }
    }

    #[must_use]
    pub fn is_variable(&self) -> Self {
        self.matching(&Predicate::is_variable())
    }

    #[must_use]
    pub fn is_static(&self) -> Self {
        self.matching(&Predicate::is_static())
    }

    #[must_use]
    pub fn has_operation(&self, method: Method) -> Self {
        self.matching(&Predicate::has_operation(method))
    }

    #[must_use]
    pub fn has_any_operation(&self) -> Self {
        self.matching(&Predicate::has_any_operation())
    }

    #[must_use]
    pub fn is_resource_endpoint(&self) -> Self {
        self.matching(&Predicate::is_resource_endpoint())
    }

    #[must_use]
    pub fn is_resource_endpoint_type(&self, endpoint_type: ResourceEndpointType) -> Self {
        self.matching(&Predicate::is_resource_endpoint_type(endpoint_type))
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Template paths of the selected segments, in order.
    #[must_use]
    pub fn template_paths(&self) -> Vec<&'m str> {
        let model = self.model;
        self.nodes
            .iter()
            .map(|id| model.segment(*id).template_path())
            .collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl<'m> IntoIterator for Query<'m> {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl UriModel {
    /// Query over every reachable segment, root first, in pre-order.
    #[must_use]
    pub fn query(&self) -> Query<'_> {
        Query::new(self, self.segments())
    }

    /// Query over a caller-chosen node list.
    pub fn query_nodes(&self, nodes: impl IntoIterator<Item = NodeId>) -> Query<'_> {
        Query::new(self, nodes)
    }
}
