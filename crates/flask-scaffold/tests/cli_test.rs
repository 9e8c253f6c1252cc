//! Integration tests for the flask-scaffold binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary with a controlled PATH and no home override from the environment
fn bare_cmd(path_var: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flask-scaffold").unwrap();
    cmd.env("PATH", path_var)
        .env("SHELL", "/bin/bash")
        .env_remove("FLASK_SCAFFOLD_HOME")
        .env_remove("RUST_LOG");
    cmd
}

fn cmd(home: &Path, path_var: &Path) -> Command {
    let mut cmd = bare_cmd(path_var);
    cmd.arg("--home").arg(home);
    cmd
}

#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_help() {
    Command::cargo_bin("flask-scaffold")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--home"))
        .stdout(predicate::str::contains("--no-alias"));
}

#[test]
fn test_version() {
    Command::cargo_bin("flask-scaffold")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_quit_exits_zero_without_writing() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();

    cmd(home.path(), bin.path()).write_stdin("q\n").assert().success();

    assert_eq!(fs::read_dir(home.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_tools_exit_one() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();

    cmd(home.path(), bin.path())
        .write_stdin("1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Poetry"));

    assert_eq!(fs::read_dir(home.path()).unwrap().count(), 0);
}

#[test]
fn test_closed_stdin_exits_one() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();

    cmd(home.path(), bin.path()).write_stdin("").assert().code(1);
}

#[cfg(unix)]
#[test]
fn test_requirements_workflow_end_to_end() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_tool(bin.path(), "pyenv");

    cmd(home.path(), bin.path())
        .write_stdin("2\nblog\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pip install -r requirements.txt"));

    let root = home.path().join("blog");
    assert!(root.join("requirements.txt").is_file());
    assert!(root.join("app/__init__.py").is_file());
    assert!(!home.path().join(".bashrc").exists());
}

#[cfg(unix)]
#[test]
fn test_poetry_workflow_respects_no_alias() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_tool(bin.path(), "pyenv");
    fake_tool(bin.path(), "poetry");

    cmd(home.path(), bin.path())
        .arg("--no-alias")
        .write_stdin("1\nshop\n\n\n\n\n\n\n\n")
        .assert()
        .success();

    assert!(home.path().join("shop/pyproject.toml").is_file());
    assert!(!home.path().join(".bashrc").exists());
}

#[cfg(unix)]
#[test]
fn test_directory_conflict_abort_exits_one() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_tool(bin.path(), "pyenv");
    let root = home.path().join("blog");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    cmd(home.path(), bin.path())
        .write_stdin("2\nblog\n\n\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already has content"));

    let entries: Vec<_> = fs::read_dir(&root).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
}

#[cfg(unix)]
#[test]
fn test_home_taken_from_environment() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_tool(bin.path(), "pyenv");

    bare_cmd(bin.path())
        .env("FLASK_SCAFFOLD_HOME", home.path())
        .write_stdin("2\nblog\n\n\n")
        .assert()
        .success();

    assert!(home.path().join("blog/requirements.txt").is_file());
}

#[cfg(unix)]
#[test]
fn test_home_flag_beats_environment() {
    let flag_home = TempDir::new().unwrap();
    let env_home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_tool(bin.path(), "pyenv");

    cmd(flag_home.path(), bin.path())
        .env("FLASK_SCAFFOLD_HOME", env_home.path())
        .write_stdin("2\nblog\n\n\n")
        .assert()
        .success();

    assert!(flag_home.path().join("blog").is_dir());
    assert_eq!(fs::read_dir(env_home.path()).unwrap().count(), 0);
}
