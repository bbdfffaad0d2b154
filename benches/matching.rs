#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use std::hint::black_box;
use uritree::placeholder::extract_placeholders;
use uritree::{UriModel, UriModelBuilder};

const TEMPLATES: &[(&str, Method)] = &[
    ("/", Method::GET),
    ("/zoo/animals", Method::GET),
    ("/zoo/animals", Method::POST),
    ("/zoo/animals/{id}", Method::GET),
    ("/zoo/animals/{id}", Method::PUT),
    ("/zoo/animals/{id}", Method::DELETE),
    ("/zoo/animals/{id}/toys/{toy_id}", Method::GET),
    (
        "/zoo/{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}",
        Method::GET,
    ),
    (
        "/inventory/{warehouse_id}/feeds/{feed_id}/items/{item_id}/batches/{batch_id}",
        Method::POST,
    ),
    ("/complex/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}", Method::GET),
    ("/files/{name}.{ext}", Method::GET),
    ("/zoo/health", Method::HEAD),
];

fn build_model() -> UriModel {
    let mut builder = UriModelBuilder::new();
    for (template, method) in TEMPLATES {
        // every placeholder documents itself
        let names: Vec<String> = template
            .split('/')
            .flat_map(|segment| extract_placeholders(segment).0)
            .map(|p| p.name)
            .collect();
        builder
            .add_template(template, method.clone(), &names)
            .expect("template should register");
    }
    builder.build()
}

fn bench_path_mapping(c: &mut Criterion) {
    let model = build_model();
    let paths = [
        "/zoo/animals/123",
        "/zoo/animals/123/toys/456",
        "/zoo/cats/animals/123/habitats/88/sections/5",
        "/inventory/1/feeds/2/items/3/batches/4",
        "/complex/1/2/3/4/5/6/7/8/9",
        "/files/report.pdf",
        "/zoo/missing/route",
    ];

    c.bench_function("path_segments_by_stable_uri_path", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(model.path_segments_by_stable_uri_path(black_box(path)));
            }
        })
    });

    c.bench_function("capture_path_values", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(model.capture_path_values(black_box(path)));
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_model", |b| b.iter(|| black_box(build_model())));
}

fn bench_query(c: &mut Criterion) {
    let model = build_model();
    c.bench_function("query_variable_get", |b| {
        b.iter(|| {
            black_box(
                model
                    .query()
                    .is_variable()
                    .has_operation(Method::GET)
                    .len(),
            )
        })
    });
}

criterion_group!(benches, bench_path_mapping, bench_build, bench_query);
criterion_main!(benches);
