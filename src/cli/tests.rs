//! Unit tests for CLI commands

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::cli::{execute, Cli, Commands};
use crate::model::{RenderStyle, ResourceEndpointType};
use crate::runtime_config::RuntimeConfig;
use clap::Parser;
use http::Method;
use std::io::Write;
use tempfile::NamedTempFile;

const SPEC: &str = r#"
openapi: 3.1.0
info: { title: Users, version: "1" }
servers:
  - url: https://api.example.com/v1
paths:
  /users:
    get:
      operationId: list_users
      responses: { "200": { description: OK } }
  /users/{id}:
    parameters:
      - { name: id, in: path, required: true, schema: { type: string } }
    get:
      operationId: get_user
      responses: { "200": { description: OK } }
  /users/{id}/posts:
    get:
      operationId: list_posts
      parameters:
        - { name: id, in: path, required: true, schema: { type: string } }
      responses: { "200": { description: OK } }
"#;

fn spec_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(SPEC.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    execute(&cli, &RuntimeConfig::default(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["uritree", "tree", "--spec", "test.yaml"],
        vec!["uritree", "tree", "--spec", "test.yaml", "--ascii"],
        vec!["uritree", "match", "--spec", "test.yaml", "/users/1"],
        vec!["uritree", "query", "--spec", "test.yaml", "--variable"],
        vec![
            "uritree",
            "resolve",
            "--spec",
            "test.yaml",
            "--template",
            "/users/{id}",
            "--set",
            "id=1",
        ],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_query_flags_parse() {
    let cli = Cli::try_parse_from([
        "uritree",
        "query",
        "--spec",
        "test.yaml",
        "--method",
        "delete",
        "--endpoint",
        "multiple",
        "--any-operation",
    ])
    .unwrap();

    match cli.command {
        Commands::Query {
            method,
            endpoint,
            any_operation,
            variable,
            ..
        } => {
            assert_eq!(method, Some(Method::DELETE));
            assert_eq!(endpoint, Some(ResourceEndpointType::Multiple));
            assert!(any_operation);
            assert!(!variable);
        }
        _ => panic!("Expected Query command"),
    }
}

#[test]
fn test_conflicting_and_malformed_flags_are_rejected() {
    assert!(Cli::try_parse_from([
        "uritree", "query", "--spec", "t.yaml", "--variable", "--static"
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "uritree", "resolve", "--spec", "t.yaml", "--template", "/a", "--set", "novalue"
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "uritree", "query", "--spec", "t.yaml", "--endpoint", "many"
    ])
    .is_err());
}

#[test]
fn test_tree_command_renders() {
    let file = spec_file();
    let path = file.path().to_str().unwrap();
    let out = run(&["uritree", "tree", "--spec", path, "--ascii"]).unwrap();
    assert!(out.starts_with("/\n\\- users [GET]"));
    assert!(out.contains("{id} [GET]"));
    assert!(out.contains("posts [GET]"));
}

#[test]
fn test_tree_command_uses_configured_style() {
    let file = spec_file();
    let cli = Cli::try_parse_from(["uritree", "tree", "--spec", file.path().to_str().unwrap()])
        .unwrap();
    let config = RuntimeConfig {
        render_style: RenderStyle::Ascii,
        include_base_path: true,
    };
    let mut out = Vec::new();
    execute(&cli, &config, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("/\n\\- v1\n"));
}

#[test]
fn test_match_command_json() {
    let file = spec_file();
    let path = file.path().to_str().unwrap();
    let out = run(&["uritree", "match", "--spec", path, "/Users/42/posts", "--json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["template"], "/users/{id}/posts");
    assert_eq!(json["path"], "/Users/42/posts");
    assert_eq!(json["endpoint_type"], "multiple");
    assert_eq!(json["params"][0][0], "id");
    assert_eq!(json["params"][0][1], "42");
    assert_eq!(json["segments"].as_array().unwrap().len(), 4);
}

#[test]
fn test_match_command_errors() {
    let file = spec_file();
    let path = file.path().to_str().unwrap();
    assert!(run(&["uritree", "match", "--spec", path, "/nowhere"]).is_err());
    assert!(run(&["uritree", "match", "--spec", path, "/users", "--method", "post"]).is_err());
    assert!(run(&["uritree", "match", "--spec", path, "/users", "--method", "get"]).is_ok());
}

#[test]
fn test_query_command_lists_templates() {
    let file = spec_file();
    let path = file.path().to_str().unwrap();
    let out = run(&["uritree", "query", "--spec", path, "--endpoint", "one"]).unwrap();
    assert_eq!(out, "/users\n");

    let out = run(&["uritree", "query", "--spec", path, "--variable", "--json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["template"], "/users/{id}");
    assert_eq!(items[0]["variable"], true);
}

#[test]
fn test_resolve_command() {
    let file = spec_file();
    let path = file.path().to_str().unwrap();
    let out = run(&[
        "uritree",
        "resolve",
        "--spec",
        path,
        "--template",
        "/users/{id}/posts",
        "--set",
        "id=42",
        "--json",
    ])
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["path"], "/users/42/posts");
    assert_eq!(json["endpoint_type"], "one");

    assert!(run(&[
        "uritree",
        "resolve",
        "--spec",
        path,
        "--template",
        "/users/{id}",
    ])
    .is_err());
    assert!(run(&[
        "uritree",
        "resolve",
        "--spec",
        path,
        "--template",
        "/groups/{id}",
        "--set",
        "id=1",
    ])
    .is_err());
}

#[test]
fn test_missing_spec_file_is_an_error() {
    let err = run(&["uritree", "tree", "--spec", "/definitely/not/here.yaml"]).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read spec file"));
}
