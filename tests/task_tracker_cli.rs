//! End-to-end runs of the task_tracker binary against a temporary tasks file

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn task_tracker(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("task_tracker").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("APP_TASKS_FILE", temp_dir.path().join("tasks.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_creates_tasks_file() {
    let temp_dir = TempDir::new().unwrap();

    task_tracker(&temp_dir)
        .args(["add", "buy", "milk"])
        .assert()
        .success()
        .stdout("Task added with ID: 1\n");

    let written = fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap();
    let tasks: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["description"], "buy milk");
    assert_eq!(tasks[0]["status"], "todo");
    assert!(tasks[0]["createdAt"].is_string());
    assert!(written.contains("\n  {\n    \"id\": 1,"));
}

#[test]
fn test_full_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    for description in ["one", "two", "three"] {
        task_tracker(&temp_dir).args(["add", description]).assert().success();
    }

    task_tracker(&temp_dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout("Task 2 deleted\n");
    task_tracker(&temp_dir)
        .args(["in-progress", "3"])
        .assert()
        .success()
        .stdout("Task 3 status updated to in-progress\n");

    task_tracker(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1, Description: one, Status: todo"))
        .stdout(predicate::str::contains("ID: 3, Description: three, Status: in-progress"))
        .stdout(predicate::str::contains("ID: 2").not());

    task_tracker(&temp_dir)
        .arg("list-done")
        .assert()
        .success()
        .stdout("No tasks found\n");
}

#[test]
fn test_logical_misses_exit_zero() {
    let temp_dir = TempDir::new().unwrap();

    task_tracker(&temp_dir)
        .args(["done", "7"])
        .assert()
        .success()
        .stdout("Task 7 not found\n");

    task_tracker(&temp_dir).args(["add", "x"]).assert().success();
    task_tracker(&temp_dir)
        .args(["mark", "1", "blocked"])
        .assert()
        .success()
        .stdout("Invalid status. Use: todo, in-progress, done\n");
}

#[test]
fn test_argument_errors_exit_one() {
    let temp_dir = TempDir::new().unwrap();

    task_tracker(&temp_dir).arg("add").assert().code(1);
    task_tracker(&temp_dir).args(["delete", "two"]).assert().code(1);
    task_tracker(&temp_dir).arg("explode").assert().code(1);
    task_tracker(&temp_dir).arg("--help").assert().success();
    assert!(!temp_dir.path().join("tasks.json").exists());
}

#[test]
fn test_corrupt_file_is_reported_and_kept() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.json");
    fs::write(&path, "[{\"id\": 1,").unwrap();

    task_tracker(&temp_dir)
        .args(["add", "new"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not contain a valid record list"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "[{\"id\": 1,");
}
