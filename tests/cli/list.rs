//! Tests for `dem list`.

use crate::support::*;

fn populated() -> Test {
    let t = Test::new();
    for (scope, key, value) in [
        (["-p", "shop", "-e", "dev", "-m", "api"], "db.host", "dev-db"),
        (["-p", "shop", "-e", "dev", "-m", "api"], "db.port", "5432"),
        (["-p", "shop", "-e", "prod", "-m", "api"], "db.host", "prod-db"),
        (["-p", "blog", "-e", "dev", "-m", "web"], "theme", "dark"),
    ] {
        assert_success(&t.add_in(&scope, key, value));
    }
    t
}

#[test]
fn test_list_empty() {
    let t = Test::new();
    let output = t.list(&[]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "No configuration items found.");
}

#[test]
fn test_list_all_sorted() {
    let t = populated();
    let output = t.list(&[]);
    assert_success(&output);
    assert_eq!(
        stdout_lines(&output),
        ["theme=dark", "db.host=dev-db", "db.port=5432", "db.host=prod-db"]
    );
}

#[test]
fn test_list_filters_by_scope() {
    let t = populated();

    let output = t.list(&["-e", "dev"]);
    assert_eq!(
        stdout_lines(&output),
        ["theme=dark", "db.host=dev-db", "db.port=5432"]
    );

    let output = t.list(&["-p", "shop", "-e", "prod"]);
    assert_eq!(stdout_lines(&output), ["db.host=prod-db"]);

    let output = t.list(&["-p", "nothing"]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_list_verbose_groups_headers_once() {
    let t = populated();
    let output = t.list(&["-p", "shop", "-v"]);
    assert_success(&output);
    let out = stdout(&output);

    assert_eq!(out.matches("[Project: shop]").count(), 1);
    assert_eq!(out.matches("  [Environment: dev]").count(), 1);
    assert_eq!(out.matches("  [Environment: prod]").count(), 1);
    assert_eq!(out.matches("    [Module: api]").count(), 2);
    assert!(out.contains("      Key:         db.port"));
    assert!(!out.contains("blog"));
}

#[test]
fn test_list_projects() {
    let t = populated();
    let output = t.list(&["-P"]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), ["blog", "shop"]);
}

#[test]
fn test_list_environments_within_project() {
    let t = populated();
    assert_eq!(stdout_lines(&t.list(&["-E"])), ["dev", "prod"]);
    assert_eq!(stdout_lines(&t.list(&["-E", "-p", "blog"])), ["dev"]);
}

#[test]
fn test_list_modules_within_scope() {
    let t = populated();
    assert_eq!(stdout_lines(&t.list(&["--modules"])), ["api", "web"]);
    assert_eq!(
        stdout_lines(&t.list(&["--modules", "-p", "shop", "-e", "prod"])),
        ["api"]
    );
}

#[test]
fn test_list_enumerations_are_exclusive() {
    let t = populated();
    assert_exit_code(&t.list(&["-P", "-E"]), 1);
}

#[test]
fn test_list_skips_deleted() {
    let t = populated();
    assert_success(&t.delete(&["-p", "blog"], "theme"));

    assert_eq!(stdout_lines(&t.list(&["-P"])), ["shop"]);
    assert!(!stdout(&t.list(&[])).contains("theme"));
}

#[test]
fn test_list_json() {
    let t = populated();
    let output = t.list(&["-e", "prod", "--json"]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["project"], "shop");
    assert_eq!(entries[0]["value"], "prod-db");

    let output = t.list(&["-P", "--json"]);
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, ["blog", "shop"]);
}

#[test]
fn test_ls_alias() {
    let t = populated();
    assert_eq!(stdout_lines(&t.run(&["ls", "-p", "blog"])), ["theme=dark"]);
}
