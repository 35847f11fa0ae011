use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn day2_part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("tests/inputs/day2.txt");
    cmd.assert().success().stdout("12502\n");
}

#[test]
fn day2_part1_with_given_noun_and_verb() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.args(["tests/inputs/day2.txt", "--noun", "42", "--verb", "17"]);
    cmd.assert().success().stdout("42517\n");
}

#[test]
fn day2_part1_fails_without_halt() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("tests/inputs/day2_missing_halt.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("without halt"));
}

#[test]
fn day2_part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part2").unwrap();
    cmd.args(["tests/inputs/day2.txt", "--target", "42517"]);
    cmd.assert().success().stdout("4217\n");
}

#[test]
fn day2_part2_fails_without_solution() {
    let mut cmd = Command::cargo_bin("day2_part2").unwrap();
    cmd.arg("tests/inputs/day2.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("19690720"));
}

#[test]
fn day2_part1_fails_on_empty_file() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("tests/inputs/day2_empty.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Get empty code in file"));
}
