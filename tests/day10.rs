use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn day10_part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/day10.txt");
    cmd.assert().success().stdout("8\n");
}

#[test]
fn day10_part1_fails_on_map_without_asteroid() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/day10_empty.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no asteroid"));
}
