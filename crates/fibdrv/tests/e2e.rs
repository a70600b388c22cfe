//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibdrv() -> Command {
    let mut cmd = Command::cargo_bin("fibdrv").expect("binary not found");
    cmd.env_remove("FIBDRV_N");
    cmd
}

#[test]
fn help_flag() {
    fibdrv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibdrv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}

#[test]
fn compute_f100_quiet() {
    fibdrv()
        .args(["-n", "100", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn compute_f0() {
    fibdrv()
        .args(["-n", "0", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn compute_default_index() {
    fibdrv()
        .arg("-q")
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn compute_f1000_verbose() {
    fibdrv()
        .args(["-n", "1000", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "43466557686937456435688527675040625802564",
        ))
        .stdout(predicate::str::contains("Calculator: LimbFastDoubling"));
}

#[test]
fn details_mode() {
    fibdrv()
        .args(["-n", "100", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result digits: 21"))
        .stdout(predicate::str::contains("Result limbs: 2"));
}

#[test]
fn verify_mode() {
    fibdrv()
        .args(["-n", "2000", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verified against reference"));
}

#[test]
fn index_from_environment() {
    fibdrv()
        .env("FIBDRV_N", "42")
        .arg("-q")
        .assert()
        .success()
        .stdout("267914296\n");
}

#[test]
fn sweep_quiet() {
    fibdrv()
        .args(["--upto", "10", "-q"])
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n55\n");
}

#[test]
fn sweep_lines() {
    fibdrv()
        .args(["--upto", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reading from /dev/fibonacci at offset 3, returned the sequence 2.",
        ));
}

#[test]
fn sweep_clamps_past_max_offset() {
    fibdrv()
        .args(["--upto", "6", "--max-offset", "4", "-q"])
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n3\n3\n");
}

#[test]
fn sweep_verified() {
    fibdrv()
        .args(["--upto", "200", "--verify", "-q"])
        .assert()
        .success();
}

#[test]
fn insufficient_memory_limit() {
    fibdrv()
        .args(["-n", "1000000", "--memory-limit", "1K"])
        .assert()
        .code(12)
        .stderr(predicate::str::contains("out of memory"));
}

#[test]
fn invalid_memory_limit() {
    fibdrv()
        .args(["-n", "10", "--memory-limit", "plenty"])
        .assert()
        .code(4);
}

#[test]
fn output_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("f200.txt");
    fibdrv()
        .args(["-n", "200", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.trim(), "280571172992510140037611932413038677189525");
}

#[test]
fn negative_index_rejected() {
    fibdrv().args(["-n", "-5"]).assert().failure();
}

#[test]
fn non_numeric_index_rejected() {
    fibdrv().args(["-n", "ten"]).assert().failure();
}

#[test]
fn completion_bash() {
    fibdrv()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}

#[test]
fn completion_zsh() {
    fibdrv()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}

#[test]
fn completion_fish() {
    fibdrv()
        .args(["--completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdrv"));
}
