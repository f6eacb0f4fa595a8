//! End-to-end tests for `kbdfmt keys`.

use std::process::Command;

fn keys(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_kbdfmt"))
        .arg("keys")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn keys_json(args: &[&str]) -> serde_json::Value {
    let mut all = args.to_vec();
    all.push("--json");
    let output = keys(&all);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_keys_lists_everything() {
    let result = keys_json(&[]);
    let count = result["count"].as_u64().unwrap();
    assert_eq!(result["keys"].as_array().unwrap().len() as u64, count);
    // 4 modifiers, 5 system, 12 function, 7 navigation, 4 arrows, 4 mouse
    assert_eq!(count, 36);
}

#[test]
fn test_keys_json_schema() {
    let result = keys_json(&["ctrl"]);
    let first = &result["keys"][0];
    assert_eq!(first["label"], "⌃ Ctrl");
    assert_eq!(first["category"], "modifier");
    assert_eq!(first["aliases"], serde_json::json!(["control", "ctrl"]));
}

#[test]
fn test_keys_category_filter() {
    let result = keys_json(&["--category", "mouse"]);
    let labels: Vec<_> = result["keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["Left 🖱️", "Right 🖱️", "Middle 🖱️", "Wheel 🖱️"]);
}

#[test]
fn test_keys_unknown_category() {
    let output = keys(&["--category", "gamepad"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category 'gamepad'"));
    assert!(stderr.contains("navigation"));
}

#[test]
fn test_keys_human_readable() {
    let output = keys(&["wheel"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Keys (1):"));
    assert!(stdout.contains("scrollwheel"));
}

#[test]
fn test_keys_no_match() {
    let output = keys(&["zzz"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No matching keys."));
}
