use assert_cmd::Command;
use predicates::prelude::*;

// Nothing listens here; any request would fail with a connection error.
const DEAD_SERVER: &str = "http://127.0.0.1:9";

#[test]
fn help_lists_commands() {
    Command::cargo_bin("blog-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"));
}

#[test]
fn empty_title_is_rejected_before_any_request() {
    Command::cargo_bin("blog-cli")
        .unwrap()
        .args(["--server", DEAD_SERVER, "create", "--title", "", "--content", "body"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Title and content are required"))
        .stderr(predicate::str::contains("HTTP request failed").not());
}

#[test]
fn unreachable_server_fails_list() {
    Command::cargo_bin("blog-cli")
        .unwrap()
        .args(["--server", DEAD_SERVER, "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list posts"));
}
