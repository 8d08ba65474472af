use httpmock::prelude::*;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_foreclosure-fetch");

fn command_in(dir: &TempDir) -> Command {
    let mut command = Command::new(BIN);
    command
        .current_dir(dir.path())
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_KEY")
        .env("RUST_LOG", "off");
    command
}

#[test]
fn test_missing_key_exits_before_any_request() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!([]));
    });

    let output = command_in(&temp_dir)
        .env("SUPABASE_URL", server.base_url())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SUPABASE_KEY"), "stderr was: {}", stderr);
    api_mock.assert_hits(0);
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_server_error_exits_with_status_code_and_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/auction_results");
        then.status(500);
    });

    let output = command_in(&temp_dir)
        .env("SUPABASE_URL", server.base_url())
        .env("SUPABASE_KEY", "service-key")
        .env("RUST_LOG", "foreclosure_fetch=info")
        .output()
        .unwrap();

    api_mock.assert();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500"), "stderr was: {}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("API Error"), "stdout was: {}", stdout);
    assert!(!temp_dir.path().join("data/foreclosures.json").exists());
}

#[test]
fn test_successful_run_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/auction_results")
            .header("apikey", "service-key");
        then.status(200).json_body(serde_json::json!([
            {"case_number": "2024-CA-001", "recommendation": "BID"},
            {"case_number": "2024-CA-002"}
        ]));
    });

    let output = command_in(&temp_dir)
        .env("SUPABASE_URL", server.base_url())
        .env("SUPABASE_KEY", "service-key")
        .env("RUST_LOG", "foreclosure_fetch=info")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Saved to").count(), 1, "stdout was: {}", stdout);
    assert!(stdout.contains("foreclosures.json"));
    assert!(stdout.contains("Total: 2"));
    assert!(stdout.contains("BID: 1"));
    assert!(stdout.contains("REVIEW: 1"));
    assert!(stdout.contains("SKIP: 0"));

    let written = std::fs::read_to_string(temp_dir.path().join("data/foreclosures.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(report["summary"]["total"], 2);
}

#[test]
fn test_malformed_body_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/auction_results");
        then.status(200).body("<html>maintenance</html>");
    });

    let output = command_in(&temp_dir)
        .env("SUPABASE_URL", server.base_url())
        .env("SUPABASE_KEY", "service-key")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("data/foreclosures.json").exists());
}
