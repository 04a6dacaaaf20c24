use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn bigm() -> Command {
    cargo_bin_cmd!("bigm")
}

fn problem_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_demo_prints_both_tasks() {
    bigm()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1"))
        .stdout(predicate::str::contains("x1 = 1.8; x2 = 2.4;"))
        .stdout(predicate::str::contains("Task 2"))
        .stdout(predicate::str::contains("x1 = 10; x2 = 9;"));
}

#[test]
fn test_solve_json_file() {
    let file = problem_file(
        r#"{
            "variables": ["x", "y"],
            "objective": { "coefficients": [2, 3] },
            "minimize": true,
            "constraints": [
                { "coefficients": [1, 1], "relation": ">=", "rhs": 4 },
                { "coefficients": [1, 0], "relation": "<=", "rhs": 3 },
                { "coefficients": [0, 1], "relation": "<=", "rhs": 3 }
            ]
        }"#,
    );

    bigm()
        .arg("solve")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: OPTIMAL"))
        .stdout(predicate::str::contains("x = 3; y = 1;"))
        .stdout(predicate::str::contains("=  9.00"));
}

#[test]
fn test_solve_json_output() {
    let file = problem_file(
        r#"{
            "objective": { "coefficients": [1, 2] },
            "constraints": [
                { "coefficients": [1, 3], "relation": "<=", "rhs": 9 },
                { "coefficients": [3, -2], "relation": "<=", "rhs": 5 },
                { "coefficients": [2, 1], "relation": "<=", "rhs": 6 }
            ]
        }"#,
    );

    bigm()
        .args(["solve", "--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"Optimal\""))
        .stdout(predicate::str::contains("\"iterations\": 2"));
}

#[test]
fn test_show_tableaux() {
    bigm()
        .args(["demo", "--show-tableaux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial tableau:"))
        .stdout(predicate::str::contains("Tableau after artificial basis:"))
        .stdout(predicate::str::contains("bi"));
}

#[test]
fn test_transport() {
    bigm()
        .args([
            "transport",
            "--supply",
            "30,20",
            "--demand",
            "25,25",
            "--costs",
            "1,4,3,2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("x11 = 25; x12 = 5; x21 = 0; x22 = 20;"))
        .stdout(predicate::str::contains("= 85.00"));
}

#[test]
fn test_transport_cost_count_mismatch() {
    bigm()
        .args(["transport", "--supply", "30,20", "--demand", "25,25", "--costs", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 4 costs"));
}

#[test]
fn test_mismatched_lengths_fail() {
    let file = problem_file(
        r#"{
            "objective": { "coefficients": [1, 2, 3] },
            "constraints": [
                { "coefficients": [1, 3], "relation": "<=", "rhs": 9 }
            ]
        }"#,
    );

    bigm()
        .arg("solve")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_infeasible_exit_code() {
    let file = problem_file(
        r#"{
            "objective": { "coefficients": [1] },
            "minimize": true,
            "constraints": [
                { "coefficients": [1], "relation": ">=", "rhs": 5 },
                { "coefficients": [1], "relation": "<=", "rhs": 3 }
            ]
        }"#,
    );

    bigm()
        .arg("solve")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("INFEASIBLE"));
}

#[test]
fn test_unbounded_exit_code() {
    let file = problem_file(
        r#"{
            "objective": { "coefficients": [1, 1] },
            "constraints": [
                { "coefficients": [1, -1], "relation": "<=", "rhs": 1 }
            ]
        }"#,
    );

    bigm()
        .arg("solve")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("UNBOUNDED"));
}

#[test]
fn test_negative_rhs_solves() {
    let file = problem_file(
        r#"{
            "objective": { "coefficients": [1] },
            "minimize": true,
            "constraints": [
                { "coefficients": [-1], "relation": "<=", "rhs": -2 },
                { "coefficients": [1], "relation": "<=", "rhs": 4 }
            ]
        }"#,
    );

    bigm()
        .args(["solve", "--feasibility-tolerance", "1e-6"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x1 = 2;"));
}

#[test]
fn test_iteration_limit_is_a_warning() {
    bigm()
        .args(["demo", "--max-iterations", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ITERATION LIMIT"))
        .stderr(predicate::str::contains("within 1 iterations"));
}
