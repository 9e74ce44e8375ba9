//! Tests for policies selected in `config.toml`.

use crate::support::*;

#[test]
fn test_first_match_stops_at_key_level() {
    let t = Test::with_settings("[resolve]\nmode = \"first-match\"\n");
    assert_success(&t.add("db.host", "by-key"));
    assert_success(&t.run(&["add", "legacy", "by-alias", "--alias", "db.host"]));

    let output = t.get("db.host");
    assert_success(&output);
    assert_eq!(stdout(&output), "by-key\n");

    let output = t.get("legacy");
    assert_eq!(stdout(&output), "by-alias\n");
}

#[test]
fn test_keep_single_segment_alias_policy() {
    let t = Test::with_settings("[resolve]\nalias = \"keep-single-segment\"\n");
    assert_success(&t.add("host", "example.org"));
    assert_success(&t.add("db.host", "localhost"));

    assert_exit_code(&t.get("h"), 1);
    assert_eq!(stdout(&t.get("host")), "example.org\n");
    assert_eq!(stdout(&t.get("d.h")), "localhost\n");
}

#[test]
fn test_hard_delete_removes_row() {
    let t = Test::with_settings("[store]\ndelete = \"hard\"\n");
    assert_success(&t.add("db.host", "localhost"));
    assert_success(&t.delete(&[], "db.host"));
    assert_exit_code(&t.get("db.host"), 1);

    let conn = rusqlite::Connection::open(t.db_path()).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM config_master", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn test_settings_database_path() {
    let t = Test::new();
    let custom = t.home.path().join("elsewhere.db");
    std::fs::write(
        t.home.path().join("config.toml"),
        format!("database = {:?}\n", custom.display().to_string()),
    )
    .unwrap();

    assert_success(&t.add("k", "v"));
    assert!(custom.exists());
    assert!(!t.db_path().exists());
}

#[test]
fn test_invalid_settings_is_fatal() {
    let t = Test::with_settings("[resolve]\nmode = \"sometimes\"\n");
    let output = t.add("k", "v");
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "failed to parse");
}

#[test]
fn test_unknown_settings_key_is_fatal() {
    let t = Test::with_settings("colour = true\n");
    assert_exit_code(&t.list(&[]), 2);
}
