//! Drives the built `vplanet-run` binary for output modes and exit status.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::Mutex;

static SPAWN: Mutex<()> = Mutex::new(());

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn vplanet_run(dir: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vplanet-run"))
        .arg(dir.join("vpl.in"))
        .arg("--binary")
        .arg(dir.join("vplanet"))
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_dir(script: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_script(&dir.path().join("vplanet"), script);
    fs::write(dir.path().join("vpl.in"), "sSystemName earth\n").unwrap();
    dir
}

#[test]
fn json_flag_prints_outcome() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = run_dir("echo ok > earth.log\n");

    let out = vplanet_run(dir.path(), &["--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["executed"], true);
    assert_eq!(json["output"]["system_name"], "earth");
    assert_eq!(json["output"]["log_text"], "ok\n");
}

#[test]
fn quiet_run_prints_nothing_on_stdout() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = run_dir("echo ok > earth.log\n");

    let out = vplanet_run(dir.path(), &["--quiet"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn failed_simulation_exits_with_one() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = run_dir("echo boom >&2\nexit 3\n");

    let out = vplanet_run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error running the simulator"));

    let out = vplanet_run(dir.path(), &["--quiet"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error running the simulator"));
}
