use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn rentcar() -> Command {
    let mut cmd = Command::new(cargo_bin!("rentcar"));
    cmd.arg("--catalog").arg("tests/fixtures/vehicles.json");
    cmd
}

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = rentcar();
    cmd.args(["--category", "tests/fixtures/category.json"])
        .args(["--age", "25", "--name", "Ana", "--days", "5"])
        .args(["--today", "2024-03-10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"amount\": \"R$ 550,00\""))
        .stdout(predicate::str::contains(
            "\"dueDate\": \"15 de março de 2024\"",
        ))
        .stdout(predicate::str::contains("\"name\": \"Ana\""))
        .stdout(predicate::str::contains("c1a2e3f4-000"));

    Ok(())
}

#[test]
fn test_cli_customer_file_and_config() {
    let mut cmd = rentcar();
    cmd.args(["--category", "tests/fixtures/category.json"])
        .args(["--customer", "tests/fixtures/customer.json"])
        .args(["--config", "tests/fixtures/usd.json"])
        .args(["--days", "5", "--today", "2024-03-10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"amount\": \"$550.00\""))
        .stdout(predicate::str::contains("\"dueDate\": \"March 15, 2024\""))
        .stdout(predicate::str::contains("\"id\": \"cust-7\""));
}

#[test]
fn test_cli_zero_days() {
    let mut cmd = rentcar();
    cmd.args(["--category", "tests/fixtures/category.json"])
        .args(["--age", "40", "--days", "0", "--today", "2024-03-10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"amount\": \"R$ 0,00\""))
        .stdout(predicate::str::contains(
            "\"dueDate\": \"10 de março de 2024\"",
        ));
}

#[test]
fn test_cli_age_without_bracket_fails() {
    let mut cmd = rentcar();
    cmd.args(["--category", "tests/fixtures/category.json"])
        .args(["--age", "12", "--days", "3"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No tax bracket covers customer age 12",
        ));
}

#[test]
fn test_cli_empty_category_fails() {
    let mut cmd = rentcar();
    cmd.args(["--category", "tests/fixtures/empty_category.json"])
        .args(["--age", "30", "--days", "3"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("ghost-town"));
}

#[test]
fn test_cli_requires_customer_or_age() {
    let mut cmd = rentcar();
    cmd.args(["--category", "tests/fixtures/category.json"])
        .args(["--days", "3"]);

    cmd.assert().failure();
}
