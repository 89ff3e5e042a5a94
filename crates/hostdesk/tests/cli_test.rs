//! Integration tests for the `hostdesk` binary.
//!
//! Every command runs with its config and data directories pointed at a
//! fresh temp dir, and network commands talk to a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// A `hostdesk` command isolated from the user's environment.
fn hostdesk_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hostdesk");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("HOSTDESK_PROFILE")
        .env_remove("HOSTDESK_API_URL")
        .env_remove("HOSTDESK_OUTPUT")
        .env_remove("HOSTDESK_INSECURE")
        .env_remove("HOSTDESK_TIMEOUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// A URL nothing listens on.
fn closed_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = hostdesk_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("industries")
            .and(predicate::str::contains("services"))
            .and(predicate::str::contains("customers"))
            .and(predicate::str::contains("session")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostdesk"));
}

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    let output = hostdesk_cmd(home.path()).arg("foobar").output().unwrap();
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("foobar"));
}

#[test]
fn test_service_create_requires_name_or_file() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .args(["services", "create", "--category", "1"])
        .assert()
        .failure()
        .code(2);
}

// ── Validation before network ───────────────────────────────────────

#[test]
fn test_invalid_email_fails_without_network() {
    let home = tempfile::tempdir().unwrap();
    let url = closed_url();

    hostdesk_cmd(home.path())
        .args(["--api-url", &url, "customers", "add"])
        .args(["--company", "Acme", "--contact", "Jo", "--email", "not-an-email"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid email address"));
}

#[test]
fn test_recurring_service_without_costs_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let url = closed_url();

    hostdesk_cmd(home.path())
        .args(["--api-url", &url, "services", "create"])
        .args(["--name", "Managed VPS", "--category", "1", "--billing", "recurring"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("monthly cost is required"));
}

// ── Network commands ────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_industries_list_json() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/industry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "industry_name": "Technology", "description": "Software", "status": true },
                { "id": 2, "industry_name": "Healthcare", "description": "Clinics" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "-o", "json", "industries", "list"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["name"], "Technology");
    assert_eq!(rows[1]["active"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_customers_list_merges_seed_and_leads() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/industry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 1, "industry_name": "Technology", "description": "" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "data": [
                { "id": 5, "full_name": "Ravi Nair", "company_name": "Spice Route",
                  "email": "ravi@spiceroute.in", "industry_id": 1 },
                { "id": 6, "full_name": "Meera Das", "company_name": "Coir Works",
                  "email": "meera@coir.in", "industry_id": 42 }
            ] }
        })))
        .mount(&server)
        .await;

    let output = hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "-o", "json", "customers", "list"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["company_name"], "Tech Solutions Inc.");
    assert_eq!(rows[3]["id"], 4);
    assert_eq!(rows[3]["industry"], "Technology");
    assert_eq!(rows[4]["industry"], "Unknown");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_customers_search_narrows_rows() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/industry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": { "data": [] } })))
        .mount(&server)
        .await;

    hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "-o", "plain", "customers", "list"])
        .args(["--search", "HEALTHCARE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sarah@healthcareplus.com"))
        .stdout(predicate::str::contains("john@techsolutions.com").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_table_output_for_categories_and_customers() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/service/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 3, "name": "Server Management" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/industry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": { "data": [] } })))
        .mount(&server)
        .await;

    hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "-o", "table", "services", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server Management"));

    hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "-o", "table", "customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech Solutions Inc."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_industry_server_error_exits_with_api_code() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/industry"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "industries", "create", "--name", "Energy"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Request failed with status code 500"));
}

#[test]
fn test_unreachable_api_exits_with_api_code() {
    let home = tempfile::tempdir().unwrap();
    let url = closed_url();

    hostdesk_cmd(home.path())
        .args(["--api-url", &url, "industries", "list"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_lead_prints_created_record() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/customer"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 99, "full_name": "Asha Menon", "company_name": "Backwater Labs",
                      "email": "asha@backwater.io", "city": "Kochi", "industry_id": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    hostdesk_cmd(home.path())
        .args(["--api-url", &server.uri(), "-o", "plain", "customers", "add"])
        .args(["--company", "Backwater Labs", "--contact", "Asha Menon"])
        .args(["--email", "asha@backwater.io", "--industry", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("asha@backwater.io"));
}

// ── Local state ─────────────────────────────────────────────────────

#[test]
fn test_session_round_trip() {
    let home = tempfile::tempdir().unwrap();

    hostdesk_cmd(home.path())
        .args(["session", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Nobody is signed in"));

    hostdesk_cmd(home.path())
        .args(["session", "set", "--email", "ops@cloudhouse.io", "--name", "Ops"])
        .args(["--kind", "admin"])
        .assert()
        .success();

    hostdesk_cmd(home.path())
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin dashboard").and(predicate::str::contains("/admin")));

    hostdesk_cmd(home.path())
        .args(["session", "clear"])
        .assert()
        .success();

    hostdesk_cmd(home.path())
        .args(["session", "show"])
        .assert()
        .code(3);
}

#[test]
fn test_session_set_rejects_bad_email() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .args(["session", "set", "--email", "ops", "--name", "Ops"])
        .assert()
        .code(2);
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();

    hostdesk_cmd(home.path())
        .args(["--yes", "--profile", "staging", "--api-url", "https://staging.example.com"])
        .args(["config", "init"])
        .assert()
        .success();

    hostdesk_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[profiles.staging]")
                .and(predicate::str::contains("https://staging.example.com"))
                .and(predicate::str::contains("default_profile = \"staging\"")),
        );
}

#[test]
fn test_config_use_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .args(["config", "use", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn test_config_path_points_into_config_home() {
    let home = tempfile::tempdir().unwrap();
    hostdesk_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
