//! End-to-end tests for the replace binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's global config and REPLACE_* env vars.
fn replace_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("replace").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("REPLACE_MAPFILE")
        .env_remove("REPLACE_ORDER");
    cmd
}

#[test]
fn given_positional_input_when_mapping_then_prints_replaced_text() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["hello world", "--map", "hello", "--to", "hi"])
        .assert()
        .success()
        .stdout("hi world");
}

#[test]
fn given_stdin_when_mapping_then_drops_trailing_newline() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["-m", "line", "-t", "row"])
        .write_stdin("line1\nline2\n")
        .assert()
        .success()
        .stdout("row1\nrow2");
}

#[test]
fn given_flag_and_file_collision_when_mapping_then_file_wins() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let mapfile = dir.path().join("map.json");
    fs::write(&mapfile, r#"{"a": "2"}"#).unwrap();

    replace_cmd(&home)
        .args(["a", "-m", "a", "-t", "1", "--mapfile"])
        .arg(&mapfile)
        .assert()
        .success()
        .stdout("2");
}

#[test]
fn given_mismatched_counts_when_running_then_exits_1_without_stdout() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["text", "-m", "a", "-m", "b", "-t", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("mismatched"));
}

#[test]
fn given_malformed_mapfile_when_running_then_exits_1_with_decode_error() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let mapfile = dir.path().join("broken.json");
    fs::write(&mapfile, "{not json").unwrap();

    replace_cmd(&home)
        .args(["text", "-f"])
        .arg(&mapfile)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: cannot decode mapping file"));
}

#[test]
fn given_missing_mapfile_when_running_then_exits_1_with_read_error() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["text", "--mapfile"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: cannot read"));
}

#[test]
fn given_empty_positional_when_running_then_reads_stdin() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["", "-m", "a", "-t", "b"])
        .write_stdin("aaa\n")
        .assert()
        .success()
        .stdout("bbb");
}

#[test]
fn given_invalid_order_value_when_running_then_exits_1_with_error_prefix() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["x", "--order", "bogus"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: invalid arguments: "))
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn given_unknown_flag_when_running_then_exits_1() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["x", "--nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn given_help_flag_when_running_then_exits_0_on_stdout() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mapfile"));
}

#[test]
fn given_no_mappings_when_running_then_passes_input_through() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .write_stdin("unchanged\n")
        .assert()
        .success()
        .stdout("unchanged");
}

#[test]
fn given_order_env_var_when_running_then_applies_longest_first() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .env("REPLACE_ORDER", "longest-first")
        .args(["ab", "-m", "a", "-t", "x", "-m", "ab", "-t", "y"])
        .assert()
        .success()
        .stdout("y");
}

#[test]
fn given_order_flag_when_env_disagrees_then_flag_wins() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .env("REPLACE_ORDER", "longest-first")
        .args(["ab", "-m", "a", "-t", "x", "-m", "ab", "-t", "y"])
        .args(["--order", "insertion"])
        .assert()
        .success()
        .stdout("xb");
}

// directories honours XDG_CONFIG_HOME only on Linux
#[cfg(target_os = "linux")]
#[test]
fn given_global_config_mapfile_when_running_then_uses_it() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("replace");
    fs::create_dir_all(&config_dir).unwrap();
    let mapfile = home.path().join("default.json");
    fs::write(&mapfile, r#"{"cat": "dog"}"#).unwrap();
    fs::write(
        config_dir.join("replace.toml"),
        format!("mapfile = {:?}\n", mapfile.to_string_lossy()),
    )
    .unwrap();

    replace_cmd(&home)
        .arg("cat food")
        .assert()
        .success()
        .stdout("dog food");
}

#[test]
fn given_show_config_when_running_then_prints_toml() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("order = \"insertion\""));
}

#[test]
fn given_version_flag_when_running_then_prints_version() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("replace v"));
}

#[test]
fn given_completion_flag_when_running_then_prints_script() {
    let home = TempDir::new().unwrap();

    replace_cmd(&home)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replace"));
}
