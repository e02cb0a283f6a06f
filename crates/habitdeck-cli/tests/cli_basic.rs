//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! points HOME at its own scratch directory so runs never touch real
//! user data.

use std::path::PathBuf;
use std::process::Command;

/// Run a CLI command against an isolated home directory.
///
/// CARGO_HOME is pinned to its real location so the overridden HOME
/// does not make the nested cargo invocation re-resolve it.
fn run_cli(home: &PathBuf, args: &[&str]) -> (String, String, i32) {
    let cargo_home = std::env::var_os("CARGO_HOME").unwrap_or_else(|| {
        let mut real_home = std::env::var_os("HOME").unwrap_or_default();
        real_home.push("/.cargo");
        real_home
    });
    let output = Command::new("cargo")
        .args(["run", "-p", "habitdeck-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("CARGO_HOME", cargo_home)
        .env("HABITDECK_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn scratch_home(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("habitdeck-cli-test-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch home");
    dir
}

#[test]
fn test_help() {
    let home = scratch_home("help");
    let (stdout, _, code) = run_cli(&home, &["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("habit"));
    assert!(stdout.contains("dashboard"));
}

#[test]
fn test_first_run_seeds_collection() {
    let home = scratch_home("seed");
    let (stdout, _, code) = run_cli(&home, &["habit", "list"]);
    assert_eq!(code, 0, "habit list failed");

    let habits: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(habits.as_array().expect("array").len(), 10);
}

#[test]
fn test_habit_add_and_toggle() {
    let home = scratch_home("add-toggle");
    let (stdout, _, code) = run_cli(&home, &["habit", "add", "Read", "--time", "09:00"]);
    assert_eq!(code, 0, "habit add failed");
    assert!(stdout.contains("Habit created:"));

    let id = stdout
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Habit created: "))
        .expect("created id")
        .to_string();

    let (stdout, _, code) = run_cli(&home, &["habit", "toggle", &id]);
    assert_eq!(code, 0, "habit toggle failed");
    let habit: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(habit["completed"], serde_json::Value::Bool(true));
}

#[test]
fn test_dashboard_window_spans_five_days() {
    let home = scratch_home("window");
    let (stdout, _, code) = run_cli(&home, &["dashboard", "window"]);
    assert_eq!(code, 0, "dashboard window failed");

    let view: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(view["days"].as_array().expect("days").len(), 5);
    assert_eq!(view["progress"].as_array().expect("progress").len(), 5);
}

#[test]
fn test_doc_crud_flow() {
    let home = scratch_home("doc");
    let (stdout, _, code) = run_cli(&home, &["doc", "create", r#"{"name":"anything"}"#]);
    assert_eq!(code, 0, "doc create failed");
    let id = stdout
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Document created: "))
        .expect("created id")
        .to_string();

    let (stdout, _, code) = run_cli(&home, &["doc", "get", &id]);
    assert_eq!(code, 0, "doc get failed");
    assert!(stdout.contains("anything"));

    let (_, _, code) = run_cli(&home, &["doc", "delete", &id]);
    assert_eq!(code, 0, "doc delete failed");

    let (_, stderr, code) = run_cli(&home, &["doc", "delete", &id]);
    assert_ne!(code, 0, "deleting twice should report not found");
    assert!(stderr.contains("not found") || stderr.contains("Document not found"));
}

#[test]
fn test_dashboard_progress_has_five_entries() {
    let home = scratch_home("progress");
    let (stdout, _, code) = run_cli(&home, &["dashboard", "progress"]);
    assert_eq!(code, 0, "dashboard progress failed");

    let ratios: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    let ratios = ratios.as_array().expect("array");
    assert_eq!(ratios.len(), 5);
    for ratio in ratios {
        assert!(ratio.as_u64().expect("integer ratio") <= 100);
    }
}

#[test]
fn test_compact_json_when_pretty_disabled() {
    let home = scratch_home("compact");
    let (_, _, code) = run_cli(&home, &["config", "set", "display.pretty_json", "false"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(&home, &["habit", "list"]);
    assert_eq!(code, 0, "habit list failed");
    assert_eq!(stdout.trim().lines().count(), 1, "expected single-line JSON");
    let habits: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(habits.as_array().expect("array").len(), 10);
}

#[test]
fn test_config_defaults() {
    let home = scratch_home("config");
    let (stdout, _, code) = run_cli(&home, &["config", "get", "profile.name"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "ALAN");
}
