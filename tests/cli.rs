//! Tests for the insurance-store binary.

mod common;

use std::process::{Command, Output};

use common::temp_file;
use tempfile::TempDir;

/// Run the binary with an empty config dir so user config never leaks in.
fn run(args: &[&str]) -> Output {
    let config_home = TempDir::new().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_insurance-store"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn demo_run_prints_two_snapshots() {
    let output = run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let claim = "{ name: \"Alex\", amountOfMoneyToCollect: 100 }";
    let expected = format!(
        "claimsHistory: [{claim}]\naccounting: 20\npolicies: []\n\
         claimsHistory: [{claim}, {claim}, {claim}]\naccounting: -140\npolicies: []\n"
    );
    assert_eq!(stdout, expected);
}

#[test]
fn json_format_prints_parseable_snapshots() {
    let output = run(&["--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let snapshots: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0]["accounting"], 20);
    assert_eq!(snapshots[1]["accounting"], -140);
    assert_eq!(snapshots[1]["claimsHistory"].as_array().unwrap().len(), 3);
}

#[test]
fn config_file_changes_balance_and_premium() {
    let (_dir, path) = temp_file(
        "config.toml",
        "[company]\nstarting_balance = 1000\npolicy_premium = 0\n",
    );
    let output = run(&["--config", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accounting: 900"));
    assert!(stdout.contains("accounting: 700"));
}

#[test]
fn script_without_snapshot_prints_final_state() {
    let (_dir, path) = temp_file(
        "run.json",
        r#"[{"dispatch": {"type": "CREATE_POLICY", "payload": {"name": "Sam", "amount": 5}}}]"#,
    );
    let output = run(&["--script", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "claimsHistory: []\naccounting: 105\npolicies: [\"Sam\"]\n");
}

#[test]
fn invalid_config_exits_with_error() {
    let (_dir, path) = temp_file("config.toml", "[company]\npolicy_premium = -3\n");
    let output = run(&["--config", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn missing_script_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = run(&["--script", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read script"));
}

#[test]
fn extreme_claim_amount_saturates_and_exits_cleanly() {
    let (_dir, path) = temp_file(
        "run.json",
        r#"[{"dispatch": {"type": "CREATE_CLAIM", "payload": {"name": "Eve", "amountOfMoneyToCollect": -9223372036854775808}}}]"#,
    );
    let output = run(&["--script", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accounting: 9223372036854775807"));
}
