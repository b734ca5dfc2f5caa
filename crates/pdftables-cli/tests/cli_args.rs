use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdftables").unwrap()
}

#[test]
fn help_flag_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--method"));
}

#[test]
fn help_lists_method_values() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"))
        .stdout(predicate::str::contains("tabula"))
        .stdout(predicate::str::contains("camelot"))
        .stdout(predicate::str::contains("pdfplumber"));
}

#[test]
fn no_args_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_method_is_rejected() {
    cmd()
        .args(["doc.pdf", "--method", "ocr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_input_exits_with_one() {
    cmd()
        .arg("/nonexistent/missing.pdf")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn probe_lines_print_before_path_check() {
    cmd()
        .arg("/nonexistent/missing.pdf")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("PDF Table Extractor"))
        .stdout(predicate::str::contains("✓ table engine available"))
        .stdout(predicate::str::contains("✓ xlsx writer available"));
}
