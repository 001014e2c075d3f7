#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn xmlgen() -> Command {
    let mut cmd = Command::cargo_bin("xmlgen").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_document_from_stdin() {
    xmlgen()
        .write_stdin(r#"["person", {"occupation": "Developer"}, "Josh"]"#)
        .assert()
        .success()
        .stdout(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<person occupation=\"Developer\">Josh</person>\n",
        );
}

#[test]
fn renders_fragment_without_prolog() {
    xmlgen()
        .arg("--fragment")
        .write_stdin(r#"["list", [["item", 1], ["item", 2]]]"#)
        .assert()
        .success()
        .stdout("<list>\n\t<item>1</item>\n\t<item>2</item>\n</list>\n");
}

#[test]
fn reads_and_writes_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    let output = dir.path().join("tree.xml");
    std::fs::write(
        &input,
        r#"[{"$doctype": {"name": "greeting", "system": "hello.dtd"}}, ["greeting", "Hello, world!"]]"#,
    )
    .unwrap();

    xmlgen()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE greeting SYSTEM \"hello.dtd\">\n<greeting>Hello, world!</greeting>\n"
    );
}

#[test]
fn fails_on_empty_stdin() {
    xmlgen()
        .write_stdin("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tree description provided on stdin"));
}

#[test]
fn fails_on_missing_input_file() {
    xmlgen()
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read tree description from"));
}

#[test]
fn reports_bad_attribute_values() {
    xmlgen()
        .write_stdin(r#"["a", {"b": [1]}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("attribute b has no string value"));
}
