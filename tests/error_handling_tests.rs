//! Error handling integration tests

mod common;

use predicates::prelude::*;

use common::{TestRepo, ghopen_cmd, ghopen_cmd_in};

#[test]
fn test_missing_origin_remote() {
    let repo = TestRepo::new();
    repo.commit_file("lib/x.go", "package x\n");

    ghopen_cmd_in(&repo.path)
        .args(["blob", "lib/x.go"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no configured hosted remote 'origin'"));
}

#[test]
fn test_unknown_remote_name() {
    let repo = TestRepo::with_origin("git@github.com:acme/widgets.git");

    ghopen_cmd_in(&repo.path)
        .args(["--remote", "fork", "blob", "lib/x.go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'fork'"))
        .stderr(predicate::str::contains("git remote add fork"));
}

#[test]
fn test_empty_repository() {
    let repo = TestRepo::new();
    repo.add_remote("origin", "git@github.com:acme/widgets.git");
    repo.write_file("lib/x.go", "package x\n");

    ghopen_cmd_in(&repo.path)
        .args(["blob", "lib/x.go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no commits"));
}

#[test]
fn test_not_a_repository() {
    let outside = tempfile::TempDir::new().unwrap();

    ghopen_cmd_in(outside.path())
        .args(["blame", "file.rs"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not in a git repository"));
}

#[test]
fn test_file_outside_explicit_repository() {
    let repo = TestRepo::with_origin("git@github.com:acme/widgets.git");
    let other = tempfile::TempDir::new().unwrap();

    ghopen_cmd_in(other.path())
        .arg("-C")
        .arg(&repo.path)
        .args(["blob", "elsewhere.rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not inside repository root"));
}

#[test]
fn test_check_file_outside_explicit_repository() {
    let repo = TestRepo::with_origin("git@github.com:acme/widgets.git");
    let other = tempfile::TempDir::new().unwrap();

    ghopen_cmd_in(other.path())
        .arg("-C")
        .arg(&repo.path)
        .arg("check")
        .arg(other.path().join("f.rs"))
        .assert()
        .failure()
        .stdout("false\n");
}

#[test]
fn test_invalid_lines_value() {
    let repo = TestRepo::with_origin("git@github.com:acme/widgets.git");

    ghopen_cmd_in(&repo.path)
        .args(["blob", "lib/x.go", "--lines", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid line selection"));
}

#[test]
fn test_zero_start_line_rejected() {
    ghopen_cmd()
        .args(["blob", "lib/x.go", "--start", "0"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_shell() {
    ghopen_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}
