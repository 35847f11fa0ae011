use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn day6_part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/inputs/day6.txt");
    cmd.assert().success().stdout("54\n");
}

#[test]
fn day6_part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.arg("tests/inputs/day6.txt");
    cmd.assert().success().stdout("4\n");
}

#[test]
fn day6_part2_with_given_objects() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.args(["tests/inputs/day6.txt", "--from", "L", "--to", "H"]);
    cmd.assert().success().stdout("6\n");
}

#[test]
fn day6_part2_fails_on_unknown_object() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.args(["tests/inputs/day6.txt", "--to", "SANTA"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SANTA"));
}
