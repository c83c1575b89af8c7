use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn newsroom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("newsroom").unwrap();
    // Keep the host environment out of the tests
    cmd.env_remove("NEWSROOM_SOURCES_PATH")
        .env("NEWSROOM_TRANSLATE", "false");
    cmd
}

fn sources_file(dir: &TempDir, json: &str) -> String {
    let path = dir.path().join("sources.json");
    fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_help_lists_commands() {
    newsroom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("sources"));
}

#[test]
fn test_serve_help_shows_port_flag() {
    newsroom_cmd()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_sources_lists_builtin() {
    newsroom_cmd()
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("BBC Türkçe"))
        .stdout(predicate::str::contains("Wired"));
}

#[test]
fn test_sources_from_file() {
    let dir = TempDir::new().unwrap();
    let path = sources_file(
        &dir,
        r#"[{"url": "https://example.com/rss", "category": "Bilim", "name": "Example", "language": "en"}]"#,
    );

    newsroom_cmd()
        .arg("--sources")
        .arg(&path)
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("Example [Bilim, en]"))
        .stdout(predicate::str::contains("BBC").not());
}

#[test]
fn test_sources_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = sources_file(&dir, "[]");

    newsroom_cmd()
        .arg("sources")
        .env("NEWSROOM_SOURCES_PATH", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No sources configured."));
}

#[test]
fn test_fetch_with_no_sources_prints_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = sources_file(&dir, "[]");

    newsroom_cmd()
        .arg("--sources")
        .arg(&path)
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_invalid_sources_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = sources_file(
        &dir,
        r#"[{"url": "ftp://example.com/rss", "category": "Bilim", "name": "Example", "language": "en"}]"#,
    );

    newsroom_cmd()
        .arg("--sources")
        .arg(&path)
        .arg("sources")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_invalid_config_fails() {
    newsroom_cmd()
        .arg("sources")
        .env("NEWSROOM_PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEWSROOM_PORT"));
}
