//! CLI integration tests for Drydock.
//!
//! These tests exercise the full CLI surface except the docker-backed
//! commands, which need a container runtime.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the drydock binary command with a clean CI environment.
fn drydock(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("drydock").unwrap();
    cmd.current_dir(dir);
    // The gate reads the CI environment variable; tests control it
    cmd.env_remove("CI");
    cmd
}

/// Create a temporary project with the given manifest.
fn project(manifest: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Drydock.toml"), manifest).unwrap();
    tmp
}

fn exe_project() -> TempDir {
    project("[project]\nname = \"app\"\n")
}

// ============================================================================
// drydock tasks
// ============================================================================

#[test]
fn test_tasks_debug_disabled_by_default() {
    let tmp = exe_project();

    drydock(tmp.path())
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug artifacts: off"))
        .stdout(predicate::str::contains("[disabled] app:compileDebugCpp"))
        .stdout(predicate::str::contains("[enabled ] app:compileReleaseCpp"));
}

#[test]
fn test_tasks_enabled_under_ci_property() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["tasks", "-PCI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("debug artifacts: on"))
        .stdout(predicate::str::contains("[enabled ] app:compileDebugCpp"));
}

#[test]
fn test_tasks_enabled_under_ci_env() {
    let tmp = exe_project();

    drydock(tmp.path())
        .arg("tasks")
        .env("CI", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug artifacts: on"));
}

#[test]
fn test_tasks_enabled_when_build_requested() {
    let tmp = exe_project();

    for task in ["build", "test", "check"] {
        drydock(tmp.path())
            .args(["tasks", task])
            .assert()
            .success()
            .stdout(predicate::str::contains("debug artifacts: on"));
    }

    // A task outside the set does not flip the gate
    drydock(tmp.path())
        .args(["tasks", "assemble"])
        .assert()
        .success()
        .stdout(predicate::str::contains("debug artifacts: off"));
}

#[test]
fn test_tasks_json_output() {
    let tmp = project(
        r#"
[project]
name = "core"
subprojects = ["app", "codec"]
libraries = ["codec"]
"#,
    );

    let output = drydock(tmp.path())
        .args(["tasks", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tasks = plan["tasks"].as_array().unwrap();

    // Library subproject gets an enabled stripSymbols task
    assert!(tasks.iter().any(|t| {
        t["subproject"] == "codec"
            && t["kind"] == "strip-symbols"
            && t["enabled"] == true
    }));
    assert!(tasks.iter().any(|t| {
        t["subproject"] == "app"
            && t["kind"] == "strip-symbols"
            && t["enabled"] == false
    }));
}

#[test]
fn test_tasks_enabled_only_filter() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["tasks", "--enabled-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[disabled]").not());
}

// ============================================================================
// drydock flags
// ============================================================================

#[test]
fn test_flags_release_by_default() {
    let tmp = exe_project();

    drydock(tmp.path())
        .arg("flags")
        .assert()
        .success()
        .stdout(predicate::str::contains("-O3"))
        .stdout(predicate::str::contains("-O0").not())
        .stdout(predicate::str::contains("-std=c++20"))
        .stdout(predicate::str::contains("-DNLOGGER_USE_THREAD_LOCAL"));
}

#[test]
fn test_flags_debug_property() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["flags", "-PDEBUG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-O0"))
        .stdout(predicate::str::contains("-fdebug-prefix-map="))
        .stdout(predicate::str::contains("-O3").not());
}

#[test]
fn test_flags_c_only_filter() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["flags", "--c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# C flags for `app`:"))
        .stdout(predicate::str::contains("# C++ flags").not())
        .stdout(predicate::str::contains("-Werror").not());
}

#[test]
fn test_flags_remap_per_subproject() {
    let tmp = project(
        r#"
[project]
name = "core"
subprojects = ["transport", "codec"]
libraries = ["codec"]
"#,
    );

    drydock(tmp.path())
        .args(["flags", "-PDEBUG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# C flags for `transport`:"))
        .stdout(predicate::str::contains("# C flags for `codec`:"))
        // Each subproject's remap points at its own directory
        .stdout(predicate::str::contains(format!(
            "-fdebug-prefix-map={}=.",
            tmp.path().join("transport").display()
        )))
        .stdout(predicate::str::contains(format!(
            "-fdebug-prefix-map={}=.",
            tmp.path().join("codec").display()
        )));
}

// ============================================================================
// drydock dockerfile
// ============================================================================

#[test]
fn test_dockerfile_centos_defaults() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["dockerfile", "centos", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM centos:centos7"))
        .stdout(predicate::str::contains("devtoolset-11"))
        .stdout(predicate::str::contains("ENV JAVA_HOME=/opt/java/openjdk"))
        .stdout(predicate::str::contains("WORKDIR /core/native"));
}

#[test]
fn test_dockerfile_rhel_defaults() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["dockerfile", "rhel", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM redhat/ubi8:8.9"))
        .stdout(predicate::str::contains("gcc-toolset-12"));
}

#[test]
fn test_dockerfile_version_overrides() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args([
            "dockerfile",
            "rhel",
            "--stdout",
            "-Prhel.version=9.3",
            "-Prhel.toolset.version=13",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM redhat/ubi8:9.3"))
        .stdout(predicate::str::contains("gcc-toolset-13"));
}

#[test]
fn test_dockerfile_manifest_properties() {
    let tmp = project(
        r#"
[project]
name = "app"

[properties]
"centos.version" = "8"
"#,
    );

    drydock(tmp.path())
        .args(["dockerfile", "centos", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM centos:centos8"));
}

#[test]
fn test_dockerfile_written_under_build_dir() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["dockerfile", "centos"])
        .assert()
        .success();

    let path = tmp.path().join("build/docker/centos/Dockerfile");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("FROM centos:centos7"));
}

#[test]
fn test_dockerfile_unknown_distro() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["dockerfile", "debian", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown distribution"));
}

// ============================================================================
// drydock copy-artifacts
// ============================================================================

#[test]
fn test_copy_artifacts_missing_source_succeeds() {
    let tmp = exe_project();

    // No build output anywhere: skipped, not fatal
    drydock(tmp.path()).arg("copy-artifacts").assert().success();

    assert!(!tmp.path().join("build/exe/main/release/stripped").exists());
}

#[test]
fn test_copy_artifacts_copies_executable() {
    let tmp = exe_project();
    let exe_dir = tmp.path().join("build/exe/main/release");
    fs::create_dir_all(&exe_dir).unwrap();
    fs::write(exe_dir.join("app"), b"binary").unwrap();

    drydock(tmp.path()).arg("copy-artifacts").assert().success();

    assert_eq!(fs::read(exe_dir.join("stripped/app")).unwrap(), b"binary");
}

#[test]
fn test_copy_artifacts_skips_libraries() {
    let tmp = project(
        r#"
[project]
name = "core"
subprojects = ["app", "codec"]
libraries = ["codec"]
"#,
    );
    let codec_dir = tmp.path().join("codec/build/exe/main/release");
    fs::create_dir_all(&codec_dir).unwrap();
    fs::write(codec_dir.join("codec"), b"lib").unwrap();

    drydock(tmp.path()).arg("copy-artifacts").assert().success();

    assert!(!codec_dir.join("stripped").exists());
}

// ============================================================================
// general
// ============================================================================

#[test]
fn test_fails_without_manifest() {
    let tmp = TempDir::new().unwrap();

    drydock(tmp.path())
        .arg("tasks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Drydock.toml"));
}

#[test]
fn test_manifest_found_from_subdirectory() {
    let tmp = exe_project();
    let nested = tmp.path().join("src");
    fs::create_dir_all(&nested).unwrap();

    drydock(&nested).arg("flags").assert().success();
}

#[test]
fn test_invalid_property_override() {
    let tmp = exe_project();

    drydock(tmp.path())
        .args(["flags", "--property", "=oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty key"));
}

#[test]
fn test_completions() {
    let tmp = TempDir::new().unwrap();

    // Completions need no manifest
    drydock(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drydock"));
}
