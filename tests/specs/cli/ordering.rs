// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `reorder` and `move`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

fn three(temp: &TempDir) -> (String, String, String) {
    (
        add(temp, "rule", "A"),
        add(temp, "rule", "B"),
        add(temp, "rule", "C"),
    )
}

#[test]
fn reorder_applies_full_permutation() {
    let temp = TempDir::new().unwrap();
    let (a, b, c) = three(&temp);

    artisync(&temp)
        .args(["reorder", &c, &a, &b])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reordered 3 artifacts"));

    assert_eq!(names(&temp), vec!["C", "A", "B"]);
}

#[test]
fn reorder_survives_restart() {
    let temp = TempDir::new().unwrap();
    let (a, b, c) = three(&temp);
    artisync(&temp).args(["reorder", &b, &c, &a]).assert().success();

    // Every invocation reads state back from disk.
    assert_eq!(ids(&temp), vec![b, c, a]);
}

#[parameterized(
    missing_one = { &[0, 1] },
    repeated = { &[0, 0, 1] },
    extra = { &[0, 1, 2, 3] },
)]
fn reorder_rejects_non_permutation(picks: &[usize]) {
    let temp = TempDir::new().unwrap();
    let (a, b, c) = three(&temp);
    let all = [a, b, c, "art-unknown".to_string()];
    let order: Vec<&str> = picks.iter().map(|&i| all[i].as_str()).collect();

    artisync(&temp)
        .arg("reorder")
        .args(&order)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reorder rejected"));

    assert_eq!(names(&temp), vec!["A", "B", "C"]);
}

#[test]
fn reorder_unknown_id_rejected() {
    let temp = TempDir::new().unwrap();
    let (a, b, _) = three(&temp);
    artisync(&temp)
        .args(["reorder", &a, &b, "art-unknown"])
        .assert()
        .failure();
    assert_eq!(names(&temp), vec!["A", "B", "C"]);
}

#[parameterized(
    to_top = { 2, 1, &["C", "A", "B"] },
    to_bottom = { 0, 3, &["B", "C", "A"] },
    to_middle = { 0, 2, &["B", "A", "C"] },
    same_place = { 1, 2, &["A", "B", "C"] },
)]
fn move_to_position(which: usize, position: usize, expected: &[&str]) {
    let temp = TempDir::new().unwrap();
    let (a, b, c) = three(&temp);
    let id = [a, b, c][which].clone();

    artisync(&temp)
        .args(["move", &id, &position.to_string()])
        .assert()
        .success();

    assert_eq!(names(&temp), expected);
}

#[parameterized(
    zero = { "0" },
    past_end = { "4" },
)]
fn move_out_of_range_fails(position: &str) {
    let temp = TempDir::new().unwrap();
    let (a, _, _) = three(&temp);
    artisync(&temp).args(["move", &a, position]).assert().failure();
    assert_eq!(names(&temp), vec!["A", "B", "C"]);
}

#[test]
fn reorder_then_delete_keeps_relative_order() {
    let temp = TempDir::new().unwrap();
    let (a, b, c) = three(&temp);
    artisync(&temp).args(["reorder", &c, &b, &a]).assert().success();
    artisync(&temp).args(["delete", &b]).assert().success();
    assert_eq!(names(&temp), vec!["C", "A"]);
}
