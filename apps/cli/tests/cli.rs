//! End-to-end tests for the `fieldcheck` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str =
    r#"{"type":"4","location_id":"111","category_id":"","c_keyword":"qwerty","b_keyword":"samsung"}"#;

const STRICT: &str = r#"
[[field]]
name = "type"
required = true
rules = [{ kind = "one_of", values = ["1", "2", "3", "4"] }]

[[field]]
name = "location_id"
required = true
rules = [{ kind = "digits" }]

[[field]]
name = "category_id"
required = true
rules = [{ kind = "not_empty" }]
"#;

const LENIENT: &str = r#"
[[field]]
name = "type"
required = true

[[field]]
name = "location_id"
required = true

[[field]]
name = "category_id"

[[field]]
name = "c_keyword"

[[field]]
name = "b_keyword"
"#;

fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn fieldcheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fieldcheck").unwrap();
    cmd.current_dir(dir)
        .env_remove("FIELDCHECK_CONFIG")
        .env_remove("FIELDCHECK_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .env("FIELDCHECK_LOG", "off");
    cmd
}

#[test]
fn hello_prints_greeting() {
    let dir = workdir();
    fieldcheck(dir.path())
        .arg("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn missing_required_value_exits_one_with_error_array() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", STRICT);

    let output = fieldcheck(dir.path())
        .args(["check", "--schema", &schema, SAMPLE])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let errors: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let errors = errors.as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "category_id");
    assert_eq!(errors[0]["code"], "required");
}

#[test]
fn optional_empty_value_passes_unchanged() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", LENIENT);

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, SAMPLE])
        .assert()
        .success()
        .stdout(format!("{SAMPLE}\n"));
}

#[test]
fn reads_record_from_stdin() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", LENIENT);

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""b_keyword":"samsung""#));
}

#[test]
fn reads_record_from_file() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", LENIENT);
    let record = write(dir.path(), "record.json", SAMPLE);

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, &format!("@{record}")])
        .assert()
        .success();
}

#[test]
fn json_schema_is_accepted() {
    let dir = workdir();
    let schema = write(
        dir.path(),
        "schema.json",
        r#"{"fields":[{"name":"type","required":true,"rules":[{"kind":"exact_length","length":2}]}]}"#,
    );

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, SAMPLE])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("exact_length"));
}

#[test]
fn malformed_input_exits_two() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", STRICT);

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, "{not json"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("decode error"));
}

#[test]
fn invalid_utf8_input_exits_two() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", STRICT);

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema])
        .write_stdin(b"{\"type\":\"\xff\"}".to_vec())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("decode error"));
}

#[test]
fn unknown_flag_exits_three() {
    let dir = workdir();

    fieldcheck(dir.path())
        .args(["check", "--bogus-flag", "{}"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--bogus-flag"));
}

#[test]
fn help_exits_zero() {
    let dir = workdir();

    fieldcheck(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"));
}

#[test]
fn reject_policy_reports_unknown_fields() {
    let dir = workdir();
    let schema = write(
        dir.path(),
        "schema.toml",
        &format!("unknown_fields = \"reject\"\n{LENIENT}"),
    );

    let record = r#"{"type":"4","location_id":"1","extra":"x"}"#;

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, record])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("unknown_field").and(predicate::str::contains("extra")),
        );
}

#[test]
fn strip_policy_drops_unknown_fields() {
    let dir = workdir();
    let schema = write(
        dir.path(),
        "schema.toml",
        &format!("unknown_fields = \"strip\"\n{LENIENT}"),
    );

    let record = r#"{"extra":"x","type":"4","location_id":"1"}"#;

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, record])
        .assert()
        .success()
        .stdout("{\"type\":\"4\",\"location_id\":\"1\"}\n");
}

#[test]
fn non_string_field_exits_two() {
    let dir = workdir();
    let schema = write(dir.path(), "schema.toml", STRICT);

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, r#"{"type":4}"#])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("type"));
}

#[test]
fn schema_from_default_config_file() {
    let dir = workdir();
    let config = format!(
        "[log]\nlevel = \"off\"\n\n[schema]\n{}",
        STRICT.replace("[[field]]", "[[schema.field]]")
    );
    write(dir.path(), "fieldcheck.toml", &config);

    fieldcheck(dir.path())
        .args(["check", r#"{"type":"9","location_id":"x1","category_id":"5"}"#])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("unknown_value")
                .and(predicate::str::contains("invalid_format")),
        );
}

#[test]
fn missing_schema_exits_three() {
    let dir = workdir();

    fieldcheck(dir.path())
        .args(["check", SAMPLE])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no schema"));
}

#[test]
fn invalid_schema_exits_three() {
    let dir = workdir();
    let schema = write(
        dir.path(),
        "schema.toml",
        "[[field]]\nname = \"a\"\nrules = [{ kind = \"pattern\", regex = \"(\" }]\n",
    );

    fieldcheck(dir.path())
        .args(["check", "--schema", &schema, "{}"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid schema"));
}

#[test]
fn missing_explicit_config_exits_three() {
    let dir = workdir();

    fieldcheck(dir.path())
        .args(["--config", "nope.toml", "hello"])
        .assert()
        .code(3);
}
