use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn hello_cmd() -> Command {
    Command::cargo_bin("hello").unwrap()
}

#[test]
fn greets_world_by_default() {
    hello_cmd()
        .assert()
        .success()
        .stdout("Hello World: world\n");
}

#[test]
fn greets_positional_values_in_order() {
    hello_cmd()
        .args(["world", "42", ""])
        .assert()
        .success()
        .stdout("Hello World: world\nHello World: \"42\"\nHello World: \"\"\n");
}

#[test]
fn json_integer_renders_bare() {
    hello_cmd()
        .args(["--json", "42"])
        .assert()
        .success()
        .stdout("Hello World: 42\n");
}

#[test]
fn accepts_values_starting_with_hyphen() {
    hello_cmd()
        .args(["--json", "-5"])
        .assert()
        .success()
        .stdout("Hello World: -5\n");

    hello_cmd()
        .arg("-x")
        .assert()
        .success()
        .stdout("Hello World: \"-x\"\n");
}

#[test]
fn control_characters_are_escaped() {
    hello_cmd()
        .arg("\u{1b}[2J")
        .assert()
        .success()
        .stdout("Hello World: \"\\e[2J\"\n");
}

#[test]
fn json_values_render_by_type() {
    hello_cmd()
        .args(["--json", "42", r#""Two words""#, r#"{"b":[1,2.0],"a":null}"#])
        .assert()
        .success()
        .stdout(
            "Hello World: 42\nHello World: \"Two words\"\nHello World: #{a => undefined,b => [1,2.0]}\n",
        );
}

#[test]
fn invalid_json_exits_with_error() {
    hello_cmd()
        .args(["--json", "not json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    hello_cmd()
        .args(["--verbose", "world"])
        .assert()
        .success()
        .stdout("Hello World: world\n");
}

#[test]
fn config_values_come_first() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("hello.toml");
    fs::write(&config_path, "[greeter]\nvalues = [\"from_file\", 7]\n")?;

    hello_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("cli")
        .assert()
        .success()
        .stdout("Hello World: from_file\nHello World: 7\nHello World: cli\n");
    Ok(())
}

#[test]
fn missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    hello_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not read input"));
}

#[test]
fn config_without_values_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "[greeter]\n").unwrap();

    hello_cmd()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("greeter.values"));
}
