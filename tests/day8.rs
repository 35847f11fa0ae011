use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn day8_part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.args(["tests/inputs/day8.txt", "--width", "3", "--height", "2"]);
    cmd.assert().success().stdout("6\n");
}

#[test]
fn day8_part2_output_rendered_image() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.args(["tests/inputs/day8.txt", "--width", "3", "--height", "2"]);
    cmd.assert().success().stdout(".##\n##.\n");
}

#[test]
fn day8_part1_fails_on_wrong_dimension() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.arg("tests/inputs/day8.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("25 x 6"));
}
