//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fftmul() -> Command {
    Command::cargo_bin("fftmul").expect("binary not found")
}

#[test]
fn help_flag() {
    fftmul()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiplication"));
}

#[test]
fn version_flag() {
    fftmul()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fftmul"));
}

#[test]
fn multiplies_two_numbers() {
    fftmul()
        .args(["123", "456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: 56088"));
}

#[test]
fn multi_carry_product() {
    fftmul()
        .args(["999", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: 998001"));
}

#[test]
fn zero_operand() {
    fftmul()
        .args(["0", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: 0"));
}

#[test]
fn ten_nines_squared() {
    fftmul()
        .args(["9999999999", "9999999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: 99999999980000000001"));
}

#[test]
fn one_argument_prints_usage() {
    fftmul()
        .arg("12345")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Product:").not());
}

#[test]
fn no_arguments_prints_usage() {
    fftmul()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn three_arguments_prints_usage() {
    fftmul()
        .args(["1", "2", "3"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_digit_reports_character() {
    fftmul()
        .args(["12a3", "456"])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("invalid character in number: a"))
        .stdout(predicate::str::contains("Product:").not());
}

#[test]
fn negative_number_rejected() {
    fftmul()
        .args(["-5", "3"])
        .assert()
        .failure();
}

#[test]
fn empty_operand_rejected() {
    fftmul()
        .args(["", "456"])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("empty operand"));
}

#[test]
fn quiet_mode_prints_digits_only() {
    fftmul()
        .args(["-q", "111", "111"])
        .assert()
        .success()
        .stdout(predicate::str::diff("12321\n"));
}

#[test]
fn verbose_mode() {
    fftmul()
        .args(["-v", "123", "456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duration:"))
        .stdout(predicate::str::contains("Product: 56088"));
}

#[test]
fn details_mode() {
    fftmul()
        .args(["-d", "999", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product digits: 6"));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("product.txt");
    fftmul()
        .args(["-q", "-o", path.to_str().unwrap(), "123", "456"])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "56088");
}

#[test]
fn shell_completion_bash() {
    fftmul()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fftmul"));
}

#[test]
fn shell_completion_zsh() {
    fftmul()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fftmul"));
}

#[test]
fn large_product() {
    let a = "9".repeat(200);
    // (10^200 - 1)^2 = 10^400 - 2*10^200 + 1
    let expected = format!("{}8{}1", "9".repeat(199), "0".repeat(199));
    fftmul()
        .args(["-q", &a, &a])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{expected}\n")));
}
