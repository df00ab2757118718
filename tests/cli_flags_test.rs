//! Binary-level tests for the one-shot command-line modes.
//!
//! None of these may touch the terminal: they run the built binary with
//! piped stdio and check its exit code and output.

mod common;

use std::process::Command;

use common::{researcher_json, researchers_body};
use minidash::export::{EXPORT_FILE_NAME, HEADERS};
use minidash::gateway::RESEARCHERS_PATH;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_minidash"));
    // Keep the developer's environment out of the run
    for (key, _) in std::env::vars() {
        if key.starts_with("MINIDASH_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

#[test]
fn test_version_flag() {
    let output = binary()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("minidash ").unwrap_or("");
    assert_eq!(
        version,
        env!("CARGO_PKG_VERSION"),
        "Binary version should match CARGO_PKG_VERSION"
    );
}

#[test]
fn test_help_flag_lists_options() {
    let output = binary()
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--api-url"));
    assert!(stdout.contains("--export"));
    assert!(stdout.contains("MINIDASH_API_URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_flag_writes_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RESEARCHERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(researchers_body(vec![
            researcher_json(1, "Dr. Sarah Johnson", "CP", "completed"),
            researcher_json(2, "Dr. Emily Davis", "GC", "pending"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let uri = server.uri();
    let output = binary()
        .args(["--api-url", uri.as_str(), "--export"])
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "export failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exported 2 rows"));

    let written = std::fs::read_to_string(temp_dir.path().join(EXPORT_FILE_NAME)).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], HEADERS.join(","));
    assert!(lines[1].starts_with("Dr. Sarah Johnson,"));
    assert!(lines[2].contains(",GC,pending,"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_flag_fails_on_rejected_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RESEARCHERS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false})),
        )
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let uri = server.uri();
    let output = binary()
        .args(["--api-url", uri.as_str(), "--export"])
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(!temp_dir.path().join(EXPORT_FILE_NAME).exists());
}
