#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing. Every test points
//! `XDG_CONFIG_HOME` at a temp dir so a real user config never leaks in.

use assert_cmd::Command;
use axum::Router;
use axum::routing::post;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn llmchat(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("llmchat").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("LLMCHAT_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal chat client"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("configure"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_send_help() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .args(["send", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_send_blank_message_fails() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .args(["send", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Message is empty"));
}

#[test]
fn test_send_blank_stdin_fails() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .arg("send")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Message is empty"));
}

#[test]
fn test_send_invalid_endpoint_fails() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .args(["send", "hi", "--endpoint", "localhost:8081"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint"));
}

#[test]
fn test_send_unreachable_endpoint_exits_unavailable() {
    let home = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{addr}");

    llmchat(&home)
        .args(["send", "hi", "--endpoint", endpoint.as_str()])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    llmchat(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("http://localhost:8081"));
}

#[test]
fn test_configure_show_reads_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("llmchat");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[llmchat]\nendpoint = \"https://chat.example.com\"\n",
    )
    .unwrap();

    llmchat(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://chat.example.com"))
        .stdout(predicate::str::contains("https://chat.example.com/llm"));
}

#[test]
fn test_malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("llmchat");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[llmchat\n").unwrap();

    llmchat(&home)
        .args(["send", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_prints_trimmed_reply() {
    let router = Router::new().route("/llm", post(|| async { "  pong \n" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let home = TempDir::new().unwrap();
    let endpoint = format!("http://{addr}");

    tokio::task::spawn_blocking(move || {
        llmchat(&home)
            .args(["send", "--endpoint", endpoint.as_str()])
            .write_stdin("ping\n")
            .assert()
            .success()
            .stdout("pong\n\n");
    })
    .await
    .unwrap();
}
