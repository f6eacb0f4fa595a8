//! End-to-end tests for `kbdfmt css` and `kbdfmt preview`.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kbdfmt"))
        .env("KBDFMT_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_css_uses_configured_colors() {
    let dir = TempDir::new().unwrap();
    run(&["settings", "set", "--light-bg", "#fafafa"], dir.path());

    let output = run(&["css"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let css = String::from_utf8_lossy(&output.stdout);
    assert!(css.contains("--fkt-light-bg-color: #fafafa;"));
    assert!(css.contains("body.fkt-plugin-active kbd"));
    assert!(css.contains("@media (prefers-color-scheme: dark)"));
    assert!(!css.contains("--fkt-preview-light-bg"));
}

#[test]
fn test_css_with_preview() {
    let dir = TempDir::new().unwrap();
    let output = run(&["css", "--preview"], dir.path());
    let css = String::from_utf8_lossy(&output.stdout);
    assert!(css.contains("--fkt-preview-dark-text: #f0f0f0;"));
}

#[test]
fn test_css_rejects_invalid_stored_color() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[colors]\ndark_bg = \"rebeccapurple\"\n",
    )
    .unwrap();

    let output = run(&["css"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("dark_bg"));
}

#[test]
fn test_preview_both_modes() {
    let dir = TempDir::new().unwrap();
    let output = run(&["preview", "--mode", "both"], dir.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("⌃ Ctrl"));
    assert!(stdout.contains("48;2;48;54;61"), "dark background #30363d");
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_preview_follows_configured_theme() {
    let dir = TempDir::new().unwrap();
    run(&["settings", "set", "--theme", "light"], dir.path());

    let output = run(&["preview"], dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Light"));
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_preview_invalid_mode() {
    let dir = TempDir::new().unwrap();
    let output = run(&["preview", "--mode", "sepia"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}
