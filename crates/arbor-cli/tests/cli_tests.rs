use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the test database
fn arbor_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("arbor").expect("Failed to find arbor binary");
    cmd.arg("--no-color").arg("--database-file").arg(db_path);
    cmd
}

#[test]
fn test_cli_create_task_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args([
            "create",
            "Write release notes",
            "--description",
            "Cover every merged change",
            "--performers",
            "alice, bob",
            "--planned",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: 1"))
        .stdout(predicate::str::contains("# 1. Write release notes"))
        .stdout(predicate::str::contains("- Performers: alice, bob"))
        .stdout(predicate::str::contains("Cover every merged change"));
}

#[test]
fn test_cli_create_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args(["create", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_cli_create_subtask_of_missing_parent_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args(["create", "Orphan", "--parent", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 42 not found"));
}

#[test]
fn test_cli_list_empty_tasks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks"))
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_default_command_lists_root_tasks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Release"]).assert().success();
    arbor_cmd(&db_path)
        .args(["create", "Changelog", "--parent", "1"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Root Tasks"))
        .stdout(predicate::str::contains("## Release (ID: 1) (0/1)"))
        .stdout(predicate::str::contains("Changelog").not());
}

#[test]
fn test_cli_list_subtasks_and_status_filter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Release"]).assert().success();
    arbor_cmd(&db_path)
        .args(["create", "Changelog", "--parent", "1"])
        .assert()
        .success();
    arbor_cmd(&db_path)
        .args(["create", "Tag", "--parent", "1", "--status", "in-progress"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .args(["list", "--parent", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Subtasks of task 1"))
        .stdout(predicate::str::contains("## Changelog (ID: 2)"))
        .stdout(predicate::str::contains("## Tag (ID: 3)"));

    arbor_cmd(&db_path)
        .args(["list", "--status", "in_progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Tag (ID: 3)"))
        .stdout(predicate::str::contains("Changelog").not());
}

#[test]
fn test_cli_list_rejects_parent_with_roots() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args(["list", "--roots", "--parent", "1"])
        .assert()
        .failure();
}

#[test]
fn test_cli_show_task_details() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args(["create", "Release", "--planned", "10"])
        .assert()
        .success();
    arbor_cmd(&db_path)
        .args(["create", "Changelog", "--parent", "1", "--planned", "2.5"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Release"))
        .stdout(predicate::str::contains("## Effort"))
        .stdout(predicate::str::contains("| Planned | 10 h | 2 h 30 min | 12 h 30 min |"))
        .stdout(predicate::str::contains("- 2. Changelog"));
}

#[test]
fn test_cli_show_missing_task_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args(["show", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 7 not found"));
}

#[test]
fn test_cli_update_task_fields() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path)
        .args(["create", "Draft", "--description", "Old text"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .args([
            "update",
            "1",
            "--name",
            "Final draft",
            "--description",
            "",
            "--performers",
            "carol",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID: 1"))
        .stdout(predicate::str::contains("Renamed to 'Final draft'"))
        .stdout(predicate::str::contains("Cleared description"))
        .stdout(predicate::str::contains("- Performers: carol"))
        .stdout(predicate::str::contains("Old text").not());
}

#[test]
fn test_cli_status_transitions() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Review"]).assert().success();

    arbor_cmd(&db_path)
        .args(["status", "1", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot complete a task that has not been started",
        ));

    arbor_cmd(&db_path)
        .args(["status", "1", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Task 1 is now in_progress"));

    arbor_cmd(&db_path)
        .args(["status", "1", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Task 1 is now completed"));
}

#[test]
fn test_cli_status_json_reports_failure_without_error_exit() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Review"]).assert().success();

    arbor_cmd(&db_path)
        .args(["status", "1", "paused", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"status\": \"assigned\""));
}

#[test]
fn test_cli_completion_cascades_to_paused_subtasks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Release"]).assert().success();
    arbor_cmd(&db_path)
        .args(["create", "Changelog", "--parent", "1", "--status", "paused"])
        .assert()
        .success();
    arbor_cmd(&db_path)
        .args(["status", "1", "in_progress"])
        .assert()
        .success();
    arbor_cmd(&db_path)
        .args(["status", "1", "completed"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"))
        .stdout(predicate::str::contains("- Completed:"));
}

#[test]
fn test_cli_effort_updates_totals() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Release"]).assert().success();
    arbor_cmd(&db_path)
        .args(["create", "Changelog", "--parent", "1", "--actual", "1.5"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .args(["effort", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Actual effort of task 1 set to 2"))
        .stdout(predicate::str::contains(
            "Total actual effort including subtasks: 3 h 30 min",
        ));

    arbor_cmd(&db_path)
        .args(["effort", "1", "-3"])
        .assert()
        .failure();

    arbor_cmd(&db_path)
        .args(["effort", "1", "lots", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("'lots' is not a number"));
}

#[test]
fn test_cli_delete_task() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    arbor_cmd(&db_path).args(["create", "Release"]).assert().success();
    arbor_cmd(&db_path)
        .args(["create", "Changelog", "--parent", "1"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Task 1 has subtasks and cannot be deleted",
        ));

    arbor_cmd(&db_path)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'Changelog' (ID: 2)"));

    arbor_cmd(&db_path)
        .args(["rm", "1"])
        .assert()
        .success();

    arbor_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}
