//! End-to-end tests for the `armature` binary.
//!
//! Every run uses `--no-input` with a config file, so nothing waits on a
//! terminal.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the caller's config, environment and colors.
fn armature(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("armature").unwrap();
    cmd.env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("ARMATURE_DEFAULTS__AUTHOR")
        .env_remove("ARMATURE_PROJECT__NAME")
        .arg("--no-color");
    cmd
}

fn write_config(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("armature.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    armature(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("C++ project"))
        .stdout(predicate::str::contains("--no-input"))
        .stdout(predicate::str::contains("--templates"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    armature(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    armature(home.path())
        .arg("--lang")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--lang"));
}

#[test]
fn test_no_input_generates_console_app() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        r#"
[defaults]
author = "Ada"
build_system = "cmake"

[defaults.features]
tests = true

[project]
name = "calc"
description = "Calculator"
goal = "Add numbers"
"#,
    );
    let out = temp.path().join("out");

    armature(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&out)
        .arg("--no-input")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'calc' created"))
        .stdout(predicate::str::contains("cmake .."))
        .stdout(predicate::str::contains("./calc"));

    let root = out.join("calc");
    for rel in [
        "src/main.cpp",
        "src/calc.cpp",
        "include/calc.h",
        "tests/test_calc.cpp",
        "CMakeLists.txt",
        ".gitignore",
        "README.md",
        "LICENSE",
    ] {
        assert!(root.join(rel).is_file(), "missing {rel}");
    }
    assert!(!root.join("Makefile").exists());

    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("Ada"));
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("Calculator"));
    assert!(readme.contains("test_calc.cpp"));
}

#[test]
fn test_environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "[project]\nname = \"calc\"\n\n[defaults]\narchetype = \"header-only\"\n",
    );

    armature(temp.path())
        .env("ARMATURE_DEFAULTS__AUTHOR", "Grace")
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(temp.path())
        .arg("--no-input")
        .assert()
        .success();

    let root = temp.path().join("calc");
    assert!(!root.join("src").exists());
    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("Grace"));
}

#[test]
fn test_json_output_reports_files() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[project]\nname = \"mathlib\"\n");

    let assert = armature(temp.path())
        .args(["--output-format", "json", "--no-input"])
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["project"], "mathlib");
    let entries = json["report"]["entries"].as_array().unwrap();
    assert!(entries.iter().any(|e| e["path"] == "Makefile"));
    assert!(json["report"]["failures"].as_array().unwrap().is_empty());
}

#[test]
fn test_custom_template_source() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[project]\nname = \"calc\"\n");
    let sql = temp.path().join("templates.sql");
    fs::write(
        &sql,
        "INSERT INTO templates (project_name, file_path, content) VALUES ('c', 'README.md', 'Custom {{name}}');\n\
         INSERT INTO templates (project_name, file_path, content) VALUES ('c', 'LICENSE', 'Mine');\n\
         INSERT INTO templates (project_name, file_path, content) VALUES ('c', '.gitignore', '*.o');\n",
    )
    .unwrap();

    armature(temp.path())
        .arg("-c")
        .arg(&config)
        .arg("-t")
        .arg(&sql)
        .arg("-o")
        .arg(temp.path())
        .arg("--no-input")
        .assert()
        .success();

    let readme = fs::read_to_string(temp.path().join("calc/README.md")).unwrap();
    assert!(readme.starts_with("Custom calc"));
    assert!(readme.contains("## Project Structure"));
}

#[test]
fn test_missing_readme_template_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[project]\nname = \"calc\"\n");
    let sql = temp.path().join("templates.sql");
    fs::write(
        &sql,
        "INSERT INTO templates (project_name, file_path, content) VALUES ('c', 'LICENSE', 'Mine');\n",
    )
    .unwrap();

    armature(temp.path())
        .arg("-c")
        .arg(&config)
        .arg("-t")
        .arg(&sql)
        .arg("-o")
        .arg(temp.path())
        .arg("--no-input")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template not found: 'README.md'"));

    assert!(!temp.path().join("calc").exists());
}

#[test]
fn test_invalid_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[project]\nname = \"9lives\"\n");

    armature(temp.path())
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(temp.path())
        .arg("--no-input")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name '9lives'"));

    assert!(!temp.path().join("9lives").exists());
}

#[test]
fn test_invalid_config_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[project\nname = ");

    armature(temp.path())
        .arg("-c")
        .arg(&config)
        .arg("--no-input")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file_exits_with_one() {
    let temp = TempDir::new().unwrap();

    armature(temp.path())
        .arg("-c")
        .arg(temp.path().join("absent.toml"))
        .arg("--no-input")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_no_input_without_name_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[defaults]\nauthor = \"Ada\"\n");

    armature(temp.path())
        .arg("-c")
        .arg(&config)
        .arg("--no-input")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[project] name"));
}
