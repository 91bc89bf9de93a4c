//! End-to-end tests for the `roomgen` binary.
//!
//! Tests verify:
//! - Exit codes for usage and I/O errors
//! - No output file is created when parsing fails
//! - Deterministic output
//! - `-o -` and `--json` output
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p roomgen-cli --test cli
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::tempdir;

/// Path of the roomgen binary built for this test run.
fn roomgen_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_roomgen"))
}

fn roomgen(args: &[&str]) -> Output {
    Command::new(roomgen_binary())
        .args(args)
        .output()
        .expect("Failed to execute roomgen")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_generate_room_file() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("room.lua");

    let output = roomgen(&["-o", path_arg(&out), "-s", "A", "-s", "B", "-s", "C"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Expected success, got: {}", stdout);
    assert!(stdout.contains("SUCCESS"), "Expected SUCCESS in output: {}", stdout);

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.contains("\tconfSegment(\"A\", 1)\n\tconfSegment(\"B\", 1)\n\tconfSegment(\"C\", 1)\n"));
    assert!(script.contains("\tmgFogColor(1.0, 1.0, 1.0, 0.0, 0.0, 0.0)\n"));
    assert!(script.contains("\tlocal L = 100.0\n"));
    assert!(script.ends_with("function tick()\nend\n"));
}

#[test]
fn test_missing_output_is_usage_error() {
    let output = roomgen(&["-s", "A"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("--output-file"), "stderr: {}", stderr);
}

#[test]
fn test_missing_segment_creates_no_file() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("room.lua");

    let output = roomgen(&["-o", path_arg(&out)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn test_wrong_arity_creates_no_file() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("room.lua");

    let output = roomgen(&["-o", path_arg(&out), "-s", "A", "-E", "1", "2"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn test_non_numeric_creates_no_file() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("room.lua");

    let output = roomgen(&["-o", path_arg(&out), "-s", "A", "--gravity", "heavy"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("heavy"), "stderr: {}", stderr);
    assert!(!out.exists());
}

#[test]
fn test_unwritable_output_exits_one() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("missing").join("room.lua");

    let output = roomgen(&["-o", path_arg(&out), "-s", "A"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("error"), "stderr: {}", stderr);
}

#[test]
fn test_output_is_deterministic() {
    let tmp = tempdir().unwrap();
    let first = tmp.path().join("first.lua");
    let second = tmp.path().join("second.lua");
    let args = [
        "-s", "A", "-s", "B", "--start", "X", "--end", "Z", "-r", "1.5", "30", "-g", "2", "-E",
        "0.5", "0.2", "0.1", "0.9", "-R", "0.3", "1", "0.7", "-p", "bubbles", "-m", "7",
    ];

    for out in [&first, &second] {
        let mut full = vec!["-q", "-o", path_arg(out)];
        full.extend_from_slice(&args);
        assert!(roomgen(&full).status.success());
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_start_block_and_training_override() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("room.lua");

    let output = roomgen(&[
        "-q",
        "-o",
        path_arg(&out),
        "--start",
        "X",
        "-s",
        "Y",
        "--training-length",
        "50",
    ]);
    assert!(output.status.success());

    let script = fs::read_to_string(&out).unwrap();
    let base = script.find("\tlocal L = 100.0\n").unwrap();
    let training = script
        .find("\tif mgGet(\"player.mode\")==\"0\" then L = 50.0 end\n")
        .unwrap();
    let pool = script.find("\tconfSegment(\"Y\", 1)\n").unwrap();
    let start = script
        .find("\tif pStart then\n\t\tl = l + mgSegment(\"X\", -l)\n\tend\n")
        .unwrap();
    let main_loop = script.find("\twhile l < L do\n").unwrap();

    assert!(base < training && training < pool);
    assert!(pool < start && start < main_loop);
}

#[test]
fn test_rotation_in_radians() {
    let output = roomgen(&["-q", "-o", "-", "-s", "A", "--rotation", "2", "90"]);
    assert!(output.status.success());

    let script = String::from_utf8(output.stdout).unwrap();
    assert!(
        script.contains("\tmgRotation(2.0, 1.5707963267948966)\n"),
        "script: {}",
        script
    );
}

#[test]
fn test_stdout_target_keeps_status_on_stderr() {
    let output = roomgen(&["-o", "-", "-s", "A"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stdout.starts_with("-- generated using roomgen\n"));
    assert!(!stdout.contains("SUCCESS"));
    assert!(stderr.contains("SUCCESS"), "stderr: {}", stderr);
}

#[test]
fn test_negative_values() {
    let output = roomgen(&["-q", "-o", "-", "-s", "A", "-g", "-0.5", "-l", "-10"]);
    assert!(output.status.success());

    let script = String::from_utf8(output.stdout).unwrap();
    assert!(script.contains("\tmgGravity(-0.5)\n"));
    assert!(script.contains("\tlocal L = -10.0\n"));
}

#[test]
fn test_json_output() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("room.lua");

    let output = roomgen(&["--json", "-o", path_arg(&out), "-s", "A", "-s", "B"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let script = fs::read(&out).unwrap();

    assert_eq!(report["success"], true);
    assert_eq!(report["result"]["segment_count"], 2);
    assert_eq!(report["result"]["bytes"], script.len());
    assert_eq!(
        report["result"]["script_hash"],
        blake3::hash(&script).to_hex().to_string()
    );
}

#[test]
fn test_json_output_failure() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("missing").join("room.lua");

    let output = roomgen(&["--json", "-o", path_arg(&out), "-s", "A"]);
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], false);
    assert_eq!(report["errors"][0]["code"], "R003");
}

#[test]
fn test_numeric_looking_names_pass_through() {
    let output = roomgen(&["-q", "-o", "-", "-s", "-1", "-m", "-5"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);

    let script = String::from_utf8(output.stdout).unwrap();
    assert!(script.contains("\tconfSegment(\"-1\", 1)\n"));
    assert!(script.contains("\tmgMusic(\"-5\")\n"));
}
