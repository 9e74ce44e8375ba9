//! Tests for `dem delete`.

use crate::support::*;

#[test]
fn test_delete_confirmed() {
    let t = Test::new();
    assert_success(&t.add_in(&["-e", "dev"], "db.host", "localhost"));

    let output = t.delete(&["-e", "dev"], "db.host");
    assert_success(&output);
    assert_stderr_contains(&output, "deleted db.host");

    assert_exit_code(&t.get("db.host"), 1);
}

#[test]
fn test_delete_by_auto_alias() {
    let t = Test::new();
    assert_success(&t.add("db.host", "localhost"));

    assert_success(&t.delete(&[], "d.h"));
    assert_exit_code(&t.get("db.host"), 1);
}

#[test]
fn test_delete_declined_keeps_entry() {
    let t = Test::new();
    assert_success(&t.add("db.host", "localhost"));

    for answer in ["n\n", "no\n", "\n", ""] {
        let output = t.delete_answering(&[], "db.host", answer);
        assert_exit_code(&output, 0);
        assert_stderr_contains(&output, "Deletion cancelled.");
        assert_eq!(stdout(&t.get("db.host")), "localhost\n");
    }
}

#[test]
fn test_delete_yes_skips_prompt() {
    let t = Test::new();
    assert_success(&t.add("db.host", "localhost"));

    let output = t.run(&["delete", "db.host", "--yes"]);
    assert_success(&output);
    assert_exit_code(&t.get("db.host"), 1);
}

#[test]
fn test_delete_not_found() {
    let t = Test::new();
    let output = t.delete(&[], "nope");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "config not found for key: nope");
}

#[test]
fn test_delete_ambiguous_deletes_nothing() {
    let t = Test::new();
    assert_success(&t.add("db.host", "localhost"));
    assert_success(&t.add("deploy.hook", "/bin/true"));

    let output = t.delete(&[], "d.h");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "'d.h' matches 2 entries");
    assert_stderr_contains(&output, "db.host = localhost");
    assert_stderr_contains(&output, "deploy.hook = /bin/true");

    assert_eq!(stdout_lines(&t.list(&[])).len(), 2);
}

#[test]
fn test_delete_respects_scope() {
    let t = Test::new();
    assert_success(&t.add_in(&["-e", "dev"], "db.host", "dev-host"));
    assert_success(&t.add_in(&["-e", "prod"], "db.host", "prod-host"));

    assert_success(&t.delete(&["-e", "dev"], "db.host"));

    assert_exit_code(&t.get_in(&["-e", "dev"], "db.host"), 1);
    assert_eq!(stdout(&t.get_in(&["-e", "prod"], "db.host")), "prod-host\n");
}

#[test]
fn test_delete_is_soft_by_default() {
    let t = Test::new();
    assert_success(&t.add("db.host", "localhost"));
    assert_success(&t.delete(&[], "db.host"));

    let conn = rusqlite::Connection::open(t.db_path()).unwrap();
    let (rows, deleted): (i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), SUM(is_deleted) FROM config_master",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!((rows, deleted), (1, 1));
}

#[test]
fn test_add_after_delete_creates_new_entry() {
    let t = Test::new();
    assert_success(&t.add("db.host", "old"));
    assert_success(&t.delete(&[], "db.host"));

    let output = t.add("db.host", "new");
    assert_success(&output);
    assert_stderr_contains(&output, "added db.host");
    assert_eq!(stdout(&t.get("db.host")), "new\n");
}

#[test]
fn test_delete_verbose_summary() {
    let t = Test::new();
    assert_success(&t.add_in(&["-p", "shop"], "db.host", "localhost"));

    let output = t.run(&["delete", "d.h", "-y", "-v"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Configuration item deleted successfully:");
    assert_stdout_contains(&output, "Project:     shop");
    assert_stdout_contains(&output, "Deleted using identifier: d.h");
}
