//! CLI integration tests for the `voxlet` binary.
//!
//! These tests run the actual compiled binary via `std::process::Command`.
//! Every `VOXLET_*` variable is cleared so settings fall back to defaults,
//! and tracing is silenced so assertions only match program output.

use std::process::Command;

/// Build a `Command` pointing at the compiled `voxlet` binary.
fn voxlet_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_voxlet"));
    for (name, _) in std::env::vars() {
        if name.starts_with("VOXLET_") {
            cmd.env_remove(name);
        }
    }
    cmd.env("RUST_LOG", "off");
    cmd
}

fn resolve_json(args: &[&str]) -> serde_json::Value {
    let output = voxlet_bin()
        .arg("resolve")
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run voxlet");
    assert!(
        output.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("resolve --json should print JSON")
}

// ── 1. Version and help ─────────────────────────────────────────────────

#[test]
fn version_output() {
    let output = voxlet_bin()
        .arg("--version")
        .output()
        .expect("failed to run voxlet");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("voxlet") && stdout.contains(env!("CARGO_PKG_VERSION")),
        "version output should contain name and version, got: {stdout}"
    );
}

#[test]
fn help_lists_subcommands() {
    let output = voxlet_bin()
        .arg("--help")
        .output()
        .expect("failed to run voxlet");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["resolve", "bootstrap", "connection"] {
        assert!(stdout.contains(sub), "help should list '{sub}', got: {stdout}");
    }
}

#[test]
fn unknown_subcommand_fails() {
    let output = voxlet_bin()
        .arg("this-subcommand-does-not-exist")
        .output()
        .expect("failed to run voxlet");

    assert!(
        !output.status.success(),
        "unknown subcommand should return non-zero exit code"
    );
}

// ── 2. Resolve ──────────────────────────────────────────────────────────

#[test]
fn resolve_prints_table() {
    let output = voxlet_bin()
        .args(["resolve", "--src", "https://cdn.example.com/embed-popup.js"])
        .output()
        .expect("failed to run voxlet");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Origin"));
    assert!(stdout.contains("https://cdn.example.com/api/app-config"));
}

#[test]
fn resolve_query_theme_beats_dark_system() {
    let resolved = resolve_json(&[
        "--src",
        "https://cdn.example.com/embed-popup.js?theme=light",
        "--dark",
    ]);
    assert_eq!(resolved["theme"], "light");
    assert_eq!(resolved["scheme"], "light");
}

#[test]
fn resolve_attribute_beats_query() {
    let resolved = resolve_json(&[
        "--src",
        "https://cdn.example.com/embed-popup.js?theme=light",
        "--attr",
        "data-theme=DARK",
        "--attr",
        "data-appearance=pure",
    ]);
    assert_eq!(resolved["theme"], "dark");
    assert_eq!(resolved["appearance"], "pure");
}

#[test]
fn resolve_opaque_page_without_loader_uses_fallback() {
    let resolved = resolve_json(&["--no-loader", "--page-origin", "null"]);
    assert_eq!(resolved["origin"], "https://widget.voxlet.dev");
    assert_eq!(
        resolved["connectionDetailsUrl"],
        "https://widget.voxlet.dev/api/connection-details"
    );
}

#[test]
fn resolve_honors_settings_overrides() {
    let output = voxlet_bin()
        .args(["resolve", "--no-loader", "--page-origin", "null", "--json"])
        .env("VOXLET_FALLBACK_ORIGIN", "https://staging.voxlet.dev")
        .env("VOXLET_APP_CONFIG_PATH", "/v2/config")
        .output()
        .expect("failed to run voxlet");

    assert!(output.status.success());
    let resolved: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resolved["appConfigUrl"], "https://staging.voxlet.dev/v2/config");
}

#[test]
fn resolve_rejects_non_data_attributes() {
    let output = voxlet_bin()
        .args(["resolve", "--attr", "theme=dark"])
        .output()
        .expect("failed to run voxlet");
    assert!(!output.status.success());
}

// ── 3. Bootstrap ────────────────────────────────────────────────────────

#[test]
fn bootstrap_without_backend_halts() {
    let output = voxlet_bin()
        .args([
            "bootstrap",
            "--src",
            "http://127.0.0.1:9/embed-popup.js",
            "--attr",
            "data-theme=dark",
        ])
        .output()
        .expect("failed to run voxlet");

    assert!(!output.status.success(), "unreachable backend should fail");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("voxlet-embed-wrapper"),
        "boundary should still be printed, got: {stdout}"
    );
    assert!(stdout.contains("class=\"dark\""));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bootstrap halted"), "got: {stderr}");
}
