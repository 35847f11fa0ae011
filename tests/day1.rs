use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn day1_part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("tests/inputs/day1.txt");
    cmd.assert().success().stdout("34241\n");
}

#[test]
fn day1_part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.arg("tests/inputs/day1.txt");
    cmd.assert().success().stdout("51316\n");
}

#[test]
fn day1_part1_fails_on_bad_mass() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("tests/inputs/day1_bad.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn day1_part2_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.arg("tests/inputs/no_such_file.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.txt"));
}

#[test]
fn day1_part1_skips_blank_lines_and_padding() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("tests/inputs/day1_blank_lines.txt");
    cmd.assert().success().stdout("4\n");
}
