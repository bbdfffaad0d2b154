use http::Method;

use crate::model::{Allocation, ResourceEndpointType, UriModel};
use crate::tree::NodeId;

/// A condition over a single segment, composable with [`Predicate::And`],
/// [`Predicate::Or`] and [`Predicate::Not`].
///
/// `And` of no predicates holds for every segment; `Or` of none holds for no segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Segment has placeholders and is not allocated
    IsVariable,
    /// Segment carries an operation for the method
    HasOperation(Method),
    /// Segment carries at least one operation
    HasAnyOperation,
    /// Endpoint type is `One` or `Multiple`
    IsResourceEndpoint,
    /// Endpoint type equals the given one
    IsResourceEndpointType(ResourceEndpointType),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    #[must_use]
    pub fn is_variable() -> Self {
        Predicate::IsVariable
    }

    /// Negation of [`Predicate::IsVariable`].
    #[must_use]
    pub fn is_static() -> Self {
        Predicate::not(Predicate::IsVariable)
    }

    #[must_use]
    pub fn has_operation(method: Method) -> Self {
        Predicate::HasOperation(method)
    }

    #[must_use]
    pub fn has_any_operation() -> Self {
        Predicate::HasAnyOperation
    }

    #[must_use]
    pub fn is_resource_endpoint() -> Self {
        Predicate::IsResourceEndpoint
    }

    #[must_use]
    pub fn is_resource_endpoint_type(endpoint_type: ResourceEndpointType) -> Self {
        Predicate::IsResourceEndpointType(endpoint_type)
    }

    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::And(predicates.into_iter().collect())
    }

    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::Or(predicates.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Not(Box::new(predicate))
    }

    #[must_use]
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::And(mut items) => {
                items.push(other);
                Predicate::And(items)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    #[must_use]
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Predicate::Or(mut items) => {
                items.push(other);
                Predicate::Or(items)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    /// Evaluate against segment `id` of `model` under `allocation`.
    #[must_use]
    pub fn evaluate(&self, model: &UriModel, allocation: &Allocation, id: NodeId) -> bool {
        match self {
            Predicate::IsVariable => model.is_variable_in(id, allocation),
            Predicate::HasOperation(method) => model.segment(id).supports(method),
            Predicate::HasAnyOperation => model.segment(id).has_operations(),
            Predicate::IsResourceEndpoint => {
                model.resource_endpoint_type_in(id, allocation) != ResourceEndpointType::None
            }
            Predicate::IsResourceEndpointType(expected) => {
                model.resource_endpoint_type_in(id, allocation) == *expected
            }
            Predicate::And(items) => items.iter().all(|p| p.evaluate(model, allocation, id)),
            Predicate::Or(items) => items.iter().any(|p| p.evaluate(model, allocation, id)),
            Predicate::Not(inner) => !inner.evaluate(model, allocation, id),
        }
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }
}
