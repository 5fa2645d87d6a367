//! Integration tests for the stubdeps binary.
//!
//! These tests exercise the compiled binary using assert_cmd. Real package
//! managers are never invoked: either `--dry-run` is used or `PATH` points at
//! a stand-in script.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stubdeps_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stubdeps"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write_stub(project: &Path, name: &str, metadata: &str) {
    let dir = project.join("stubs").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("METADATA.toml"), metadata).unwrap();
}

/// Project with `curl` as an extra apt dependency and one stub needing `clang`.
fn apt_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stubdeps.toml"),
        "[extra_dependencies]\napt = [\"curl\"]\n",
    )
    .unwrap();
    write_stub(
        temp.path(),
        "llvmlite",
        "version = \"0.44.*\"\n\n[tool.stubtest]\napt_dependencies = [\"clang\"]\n",
    );
    temp
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn test_help_lists_package_managers() {
    let temp = TempDir::new().unwrap();
    stubdeps_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apt-get"))
        .stdout(predicate::str::contains("--sudo"));
}

#[test]
fn test_unknown_package_manager_is_rejected() {
    // No stubs directory exists, so any scan would also fail; the usage error wins.
    let temp = TempDir::new().unwrap();
    stubdeps_cmd(temp.path())
        .arg("pacman")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_package_manager_is_rejected() {
    let temp = TempDir::new().unwrap();
    stubdeps_cmd(temp.path()).assert().code(2);
}

// ============================================================================
// Planning
// ============================================================================

#[test]
fn test_dry_run_prints_command() {
    let temp = apt_project();
    stubdeps_cmd(temp.path())
        .args(["apt-get", "--dry-run"])
        .assert()
        .success()
        .stdout("apt-get install clang curl\n");
}

#[test]
fn test_dry_run_with_sudo() {
    let temp = apt_project();
    stubdeps_cmd(temp.path())
        .args(["--sudo", "apt-get", "--dry-run"])
        .assert()
        .success()
        .stdout("sudo apt-get install clang curl\n");
}

#[test]
fn test_nothing_to_install_succeeds_silently() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("stubs")).unwrap();

    // Not a dry run: with nothing resolved no process may be spawned.
    stubdeps_cmd(temp.path())
        .arg("brew")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_other_manager_ignores_apt_dependencies() {
    let temp = apt_project();
    stubdeps_cmd(temp.path())
        .arg("choco")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_json_output() {
    let temp = apt_project();
    let output = stubdeps_cmd(temp.path())
        .args(["apt-get", "--dry-run", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["package_manager"], "apt-get");
    assert_eq!(plan["packages"], serde_json::json!(["clang", "curl"]));
    assert_eq!(
        plan["command"],
        serde_json::json!(["apt-get", "install", "clang", "curl"])
    );
}

#[test]
fn test_json_output_when_empty() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("stubs")).unwrap();

    let output = stubdeps_cmd(temp.path())
        .args(["brew", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["packages"], serde_json::json!([]));
    assert!(plan["command"].is_null());
}

#[test]
fn test_stubs_dir_and_config_overrides() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other");
    fs::create_dir_all(other.join("pycairo")).unwrap();
    fs::write(
        other.join("pycairo").join("METADATA.toml"),
        "version = \"1.27.*\"\n\n[tool.stubtest]\nbrew_dependencies = [\"cairo\"]\n",
    )
    .unwrap();
    let config = temp.path().join("ci.toml");
    fs::write(&config, "[extra_dependencies]\nbrew = [\"pkg-config\"]\n").unwrap();

    stubdeps_cmd(temp.path())
        .arg("brew")
        .arg("--dry-run")
        .arg("--config")
        .arg(&config)
        .arg("--stubs-dir")
        .arg(&other)
        .assert()
        .success()
        .stdout("brew install cairo pkg-config\n");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_malformed_metadata_fails() {
    let temp = apt_project();
    write_stub(temp.path(), "broken", "version = [\n");

    stubdeps_cmd(temp.path())
        .args(["apt-get", "--dry-run"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_missing_stubs_dir_fails() {
    let temp = TempDir::new().unwrap();
    stubdeps_cmd(temp.path())
        .arg("apt-get")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stubs directory"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    stubdeps_cmd(temp.path())
        .args(["brew", "--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

// ============================================================================
// Execution through a stand-in package manager
// ============================================================================

#[cfg(unix)]
fn install_fake_manager(bin_dir: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir).unwrap();
    let path = bin_dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_executes_package_manager() {
    let temp = apt_project();
    let bin = temp.path().join("bin");
    let log = temp.path().join("args.log");
    install_fake_manager(
        &bin,
        "apt-get",
        &format!("#!/bin/sh\necho \"$@\" > '{}'\n", log.display()),
    );

    stubdeps_cmd(temp.path())
        .arg("apt-get")
        .env("PATH", &bin)
        .assert()
        .success()
        .stdout("apt-get install clang curl\n");

    assert_eq!(fs::read_to_string(&log).unwrap(), "install clang curl\n");
}

#[cfg(unix)]
#[test]
fn test_forwards_package_manager_exit_code() {
    let temp = apt_project();
    let bin = temp.path().join("bin");
    install_fake_manager(&bin, "apt-get", "#!/bin/sh\nexit 42\n");

    stubdeps_cmd(temp.path())
        .arg("apt-get")
        .env("PATH", &bin)
        .assert()
        .code(42)
        .stderr(predicate::str::contains("exited with status 42"));
}
