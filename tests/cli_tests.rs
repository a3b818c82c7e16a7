//! End-to-end tests for the qgjob binary: stdout, stderr and exit codes

use httpmock::prelude::*;
use serde_json::json;
use std::process::{Command, Output};

// ============================================================================
// TEST HELPERS
// ============================================================================

fn qgjob(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qgjob"))
        .args(args)
        .env_remove("QGJOB_API_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run qgjob")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn submit_args<'a>(api_url: &'a str, target: &'a str) -> Vec<&'a str> {
    vec![
        "--api-url",
        api_url,
        "submit",
        "--org-id",
        "qualgent",
        "--app-version-id",
        "xyz123",
        "--test",
        "tests/onboarding.spec.js",
        "--target",
        target,
    ]
}

// ============================================================================
// SUCCESS
// ============================================================================

#[test]
fn test_submit_created_exits_zero() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/jobs");
        then.status(201).json_body(json!({
            "job_id": "abc123",
            "status": "queued",
            "details": "Job enqueued to queue:p5"
        }));
    });

    let base_url = server.base_url();
    let output = qgjob(&submit_args(&base_url, "emulator"));

    mock.assert();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Job submitted successfully!"));
    assert!(out.contains("abc123"));
    assert!(out.contains("queue:p5"));
}

#[test]
fn test_status_running_exits_zero() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/jobs/abc123");
        then.status(200)
            .json_body(json!({"job_id": "abc123", "status": "running"}));
    });

    let base_url = server.base_url();
    let output = qgjob(&["--api-url", &base_url, "status", "abc123"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output)
        .lines()
        .any(|l| l.contains("abc123") && l.contains("running")));
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_status_not_found_exits_one_with_server_detail() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/jobs/missing");
        then.status(404)
            .json_body(json!({"detail": "Job missing not found"}));
    });

    let base_url = server.base_url();
    let output = qgjob(&["--api-url", &base_url, "status", "missing"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));
    let err = stderr(&output);
    assert!(err.contains("Error fetching job status"));
    assert!(err.contains("Job missing not found"));
}

#[test]
fn test_submit_unreachable_exits_one() {
    // Nothing listens on port 1.
    let mut args = vec!["--timeout", "5"];
    args.extend(submit_args("http://127.0.0.1:1", "device"));
    let output = qgjob(&args);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));
    let err = stderr(&output);
    assert!(err.contains("Error submitting job"));
    assert!(err.contains("could not reach job service"));
    assert_eq!(err.matches("error sending request").count(), 1, "stderr: {}", err);
}

#[test]
fn test_unknown_target_exits_two_without_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/jobs");
        then.status(201)
            .json_body(json!({"job_id": "abc123", "status": "queued"}));
    });

    let base_url = server.base_url();
    let output = qgjob(&submit_args(&base_url, "sim"));

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));
    assert!(stderr(&output).contains("invalid value"));
    assert_eq!(mock.hits(), 0);
}

#[test]
fn test_dot_job_id_exits_two() {
    let output = qgjob(&["--api-url", "http://127.0.0.1:1", "status", ".."]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a valid job ID"));
}
