//! CLI integration tests for tasks
//!
//! These tests drive the `tasks` binary against a temporary data directory
//! and check both the printed output and what ends up on disk.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance bound to `dir` for data and config
fn tasks_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tasks"));
    cmd.env("TASKS_DATA_DIR", dir.join("data"))
        .env("TASKS_CONFIG", dir.join("config.toml"))
        .env_remove("TASKS_LOG");
    cmd
}

/// Adds a task and returns its ID from the JSON output
fn add_task(dir: &Path, text: &str) -> i64 {
    let output = tasks_cmd(dir)
        .args(["--format", "json", "add", text])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    json["id"].as_i64().unwrap()
}

fn stored_list(dir: &Path, key: &str) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join("data").join(format!("{}.json", key))).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn list_json(dir: &Path) -> Vec<serde_json::Value> {
    let output = tasks_cmd(dir)
        .args(["--format", "json", "list"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Landing Tests
// =============================================================================

#[test]
fn test_landing_without_command() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("My Tasks"))
        .stdout(predicate::str::contains("tasks list"));

    // The landing screen never touches storage
    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_landing_json() {
    let dir = TempDir::new().unwrap();

    let output = tasks_cmd(dir.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["next"], "tasks list");
}

// =============================================================================
// List / Add Tests
// =============================================================================

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet"));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path())
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task"))
        .stdout(predicate::str::contains("Buy milk"));

    tasks_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn test_add_trims_text() {
    let dir = TempDir::new().unwrap();

    add_task(dir.path(), "   Walk dog   ");

    let items = list_json(dir.path());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "Walk dog");
    assert_eq!(items[0]["isEditing"], false);
}

#[test]
fn test_add_blank_is_noop() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to add"));

    assert!(list_json(dir.path()).is_empty());
}

#[test]
fn test_add_requires_text() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path()).arg("add").assert().failure();
}

#[test]
fn test_ids_are_unique() {
    let dir = TempDir::new().unwrap();

    let a = add_task(dir.path(), "a");
    let b = add_task(dir.path(), "b");
    let c = add_task(dir.path(), "c");

    assert!(a < b && b < c);
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_add_add_delete_scenario() {
    let dir = TempDir::new().unwrap();

    let milk = add_task(dir.path(), "Buy milk");
    add_task(dir.path(), "Walk dog");

    let texts: Vec<_> = list_json(dir.path())
        .iter()
        .map(|i| i["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["Buy milk", "Walk dog"]);

    tasks_cmd(dir.path())
        .args(["delete", &milk.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task"));

    let items = list_json(dir.path());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "Walk dog");
}

// =============================================================================
// Edit / Delete Tests
// =============================================================================

#[test]
fn test_edit_replaces_text() {
    let dir = TempDir::new().unwrap();
    let id = add_task(dir.path(), "Buy milk");

    tasks_cmd(dir.path())
        .args(["edit", &id.to_string(), "Buy", "oat", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task"));

    let items = list_json(dir.path());
    assert_eq!(items[0]["id"], id);
    assert_eq!(items[0]["text"], "Buy oat milk");
    assert_eq!(items[0]["isEditing"], false);
}

#[test]
fn test_edit_blank_keeps_text() {
    let dir = TempDir::new().unwrap();
    let id = add_task(dir.path(), "Keep me");

    tasks_cmd(dir.path())
        .args(["edit", &id.to_string(), " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change"));

    assert_eq!(list_json(dir.path())[0]["text"], "Keep me");
}

#[test]
fn test_edit_and_delete_unknown_id() {
    let dir = TempDir::new().unwrap();
    add_task(dir.path(), "a");

    tasks_cmd(dir.path())
        .args(["edit", "12345", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task with ID 12345"));

    tasks_cmd(dir.path())
        .args(["delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task with ID 12345"));

    assert_eq!(list_json(dir.path()).len(), 1);
}

#[test]
fn test_malformed_id_fails() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path())
        .args(["delete", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a task ID"));
}

// =============================================================================
// Storage Tests
// =============================================================================

#[test]
fn test_stored_format() {
    let dir = TempDir::new().unwrap();
    let id = add_task(dir.path(), "Buy milk");

    let stored = stored_list(dir.path(), "todos");
    assert_eq!(
        stored,
        serde_json::json!([{"id": id, "text": "Buy milk", "isEditing": false}])
    );
}

#[test]
fn test_reads_list_written_elsewhere() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("todos.json"),
        r#"[{"id":1700000000000,"text":"From the phone","isEditing":false}]"#,
    )
    .unwrap();

    tasks_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1700000000000"))
        .stdout(predicate::str::contains("From the phone"));
}

#[test]
fn test_corrupt_store_starts_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("todos.json"), "{ definitely not a list").unwrap();

    tasks_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet"))
        .stderr(predicate::str::contains("Failed to decode stored list"));

    // Next write replaces the corrupt value
    add_task(dir.path(), "fresh start");
    assert_eq!(stored_list(dir.path(), "todos")[0]["text"], "fresh start");
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other");

    tasks_cmd(dir.path())
        .args(["--data-dir", other.to_str().unwrap(), "add", "elsewhere"])
        .assert()
        .success();

    assert!(other.join("todos.json").is_file());
    assert!(list_json(dir.path()).is_empty());
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_storage_key_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "storage_key = \"work\"\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = tasks_cmd(dir.path())
        .args(["add", "Ship release"])
        .assert()
        .success();

    // Configured default format is JSON
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["text"], "Ship release");

    assert_eq!(stored_list(dir.path(), "work")[0]["text"], "Ship release");
    assert!(!dir.path().join("data").join("todos.json").exists());
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "storage_key = \"../x\"\n").unwrap();

    tasks_cmd(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("storage_key"));
}

// =============================================================================
// Verbose Mode Tests
// =============================================================================

#[test]
fn test_verbose_output() {
    let dir = TempDir::new().unwrap();

    tasks_cmd(dir.path())
        .args(["--verbose", "add", "traced"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose]"))
        .stderr(predicate::str::contains("Saved list"));
}
