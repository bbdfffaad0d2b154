#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;

use super::{Predicate, Query};
use crate::builder::{UriModelBuilder, NO_PARAMETERS};
use crate::model::{Allocation, ResourceEndpointType, UriModel};

fn sample_model() -> UriModel {
    let mut b = UriModelBuilder::new();
    b.add_template("/users", Method::GET, NO_PARAMETERS).unwrap();
    b.add_template("/users", Method::POST, NO_PARAMETERS).unwrap();
    b.add_template("/users/{id}", Method::GET, &["id"]).unwrap();
    b.add_template("/users/{id}", Method::DELETE, &["id"]).unwrap();
    b.add_template("/users/{id}/posts", Method::GET, &["id"]).unwrap();
    b.add_template("/users/{id}/posts/{postId}", Method::GET, &["id", "postId"])
        .unwrap();
    b.add_template("/users/me", Method::GET, NO_PARAMETERS).unwrap();
    b.add_template("/health", Method::GET, NO_PARAMETERS).unwrap();
    b.add_template("/admin/stats", Method::GET, NO_PARAMETERS).unwrap();
    b.add_template("/files/{name}.{ext}", Method::GET, &["name", "ext"])
        .unwrap();
    b.build()
}

#[test]
fn test_query_covers_every_segment_root_first() {
    let model = sample_model();
    let q = model.query();
    assert_eq!(q.len(), 11);
    assert_eq!(q.first(), Some(model.root()));
    assert_eq!(
        q.template_paths(),
        vec![
            "/",
            "/users",
            "/users/{id}",
            "/users/{id}/posts",
            "/users/{id}/posts/{postId}",
            "/users/me",
            "/health",
            "/admin",
            "/admin/stats",
            "/files",
            "/files/{name}.{ext}",
        ]
    );
}

#[test]
fn test_is_variable_and_is_static_partition() {
    let model = sample_model();
    let variable = model.query().is_variable();
    let fixed = model.query().is_static();
    assert_eq!(
        variable.template_paths(),
        vec!["/users/{id}", "/users/{id}/posts/{postId}", "/files/{name}.{ext}"]
    );
    assert_eq!(variable.len() + fixed.len(), model.query().len());
    assert!(fixed.iter().all(|id| !variable.nodes().contains(&id)));
}

#[test]
fn test_has_operation_filters_by_method() {
    let model = sample_model();
    assert_eq!(
        model.query().has_operation(Method::DELETE).template_paths(),
        vec!["/users/{id}"]
    );
    assert_eq!(
        model.query().has_operation(Method::POST).template_paths(),
        vec!["/users"]
    );
    assert!(model.query().has_operation(Method::PATCH).is_empty());
    assert_eq!(model.query().has_any_operation().len(), 8);
}

#[test]
fn test_endpoint_type_filters() {
    let model = sample_model();
    assert_eq!(
        model
            .query()
            .is_resource_endpoint_type(ResourceEndpointType::One)
            .template_paths(),
        vec!["/users", "/users/me", "/health", "/admin/stats"]
    );
    assert_eq!(
        model
            .query()
            .is_resource_endpoint_type(ResourceEndpointType::Multiple)
            .template_paths(),
        vec![
            "/users/{id}",
            "/users/{id}/posts",
            "/users/{id}/posts/{postId}",
            "/files/{name}.{ext}",
        ]
    );
    assert_eq!(
        model.query().is_resource_endpoint().nodes(),
        model.query().has_any_operation().nodes()
    );
}

#[test]
fn test_chained_filters_equal_conjunction() {
    let model = sample_model();
    let chained = model
        .query()
        .is_variable()
        .has_operation(Method::GET)
        .is_resource_endpoint();
    let combined = model.query().matching(&Predicate::all([
        Predicate::is_variable(),
        Predicate::has_operation(Method::GET),
        Predicate::is_resource_endpoint(),
    ]));
    assert_eq!(chained.nodes(), combined.nodes());
}

#[test]
fn test_not_static_equals_variable() {
    let model = sample_model();
    let negated = model.query().matching(&Predicate::not(Predicate::is_static()));
    assert_eq!(negated.nodes(), model.query().is_variable().nodes());

    let via_operator = model.query().matching(&!Predicate::is_static());
    assert_eq!(via_operator.nodes(), negated.nodes());
}

#[test]
fn test_empty_and_or() {
    let model = sample_model();
    assert_eq!(model.query().matching(&Predicate::And(vec![])).len(), 11);
    assert!(model.query().matching(&Predicate::Or(vec![])).is_empty());
}

#[test]
fn test_or_keeps_document_order() {
    let model = sample_model();
    let q = model.query().matching(
        &Predicate::has_operation(Method::DELETE).or(Predicate::has_operation(Method::POST)),
    );
    assert_eq!(q.template_paths(), vec!["/users", "/users/{id}"]);
}

#[test]
fn test_filters_leave_receiver_untouched() {
    let model = sample_model();
    let all = model.query();
    let narrowed = all.is_variable();
    assert_eq!(all.len(), 11);
    assert_eq!(narrowed.len(), 3);
}

#[test]
fn test_allocation_turns_variables_static() {
    let model = sample_model();
    let id = model.find_template("/users/{id}").unwrap();
    let q = model.query().with_allocation(Allocation::new().with(id));

    assert_eq!(
        q.is_variable().template_paths(),
        vec!["/users/{id}/posts/{postId}", "/files/{name}.{ext}"]
    );
    assert_eq!(
        q.is_resource_endpoint_type(ResourceEndpointType::One)
            .template_paths(),
        vec![
            "/users",
            "/users/{id}",
            "/users/{id}/posts",
            "/users/me",
            "/health",
            "/admin/stats",
        ]
    );
    // The plain query still sees the segment as variable
    assert_eq!(model.query().is_variable().len(), 3);
}

#[test]
fn test_query_nodes_on_subset() {
    let model = sample_model();
    let users = model.find_template("/users").unwrap();
    let q: Query<'_> = model.query_nodes(model.children(users).iter().copied());
    assert_eq!(q.template_paths(), vec!["/users/{id}", "/users/me"]);
    assert_eq!(q.is_static().template_paths(), vec!["/users/me"]);
    assert_eq!(q.clone().into_vec().len(), 2);
    assert_eq!(q.into_iter().count(), 2);
}
