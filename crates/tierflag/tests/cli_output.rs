//! Integration tests for CLI output behavior
//!
//! Every run gets an empty HOME and XDG_CONFIG_HOME so that defaults files
//! of the user running the tests are never picked up.

use std::process::{Command, Output};

use tempfile::TempDir;

const TIERFLAG_VARS: &[&str] = &[
    "TIERFLAG_COUNT",
    "TIERFLAG_C",
    "TIERFLAG_COUNT_FILE",
    "TIERFLAG_C_FILE",
    "TIERFLAG_SPLIT_HORIZONTAL",
    "TIERFLAG_SPLIT_H",
    "TIERFLAG_SPLIT_VERTICAL",
    "TIERFLAG_SPLIT_V",
    "TIERFLAG_SPLIT_HORIZONTAL_FILE",
    "TIERFLAG_SPLIT_VERTICAL_FILE",
];

/// A `tierflag` command isolated from the caller's environment.
fn tierflag(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tierflag"));
    for var in TIERFLAG_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to execute 'tierflag'")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "tierflag failed with exit code {:?}. stderr: {}",
        output.status.code(),
        stderr(output)
    );
}

#[test]
fn test_count_not_set() {
    let home = TempDir::new().unwrap();
    let output = run(&mut tierflag(&home));

    assert_success(&output);
    assert_eq!(stdout(&output), "count not set\n");
}

#[test]
fn test_count_from_env_and_argument() {
    let home = TempDir::new().unwrap();

    let output = run(tierflag(&home).env("TIERFLAG_C", "4"));
    assert_success(&output);
    assert_eq!(stdout(&output), "count 4\n");

    let output = run(tierflag(&home).env("TIERFLAG_C", "4").args(["--count", "2"]));
    assert_success(&output);
    assert_eq!(stdout(&output), "count 2\n");
}

#[test]
fn test_count_from_secret_file() {
    let home = TempDir::new().unwrap();
    let secret = home.path().join("count");
    std::fs::write(&secret, "9\n").unwrap();

    let output = run(tierflag(&home).env("TIERFLAG_COUNT_FILE", &secret));
    assert_success(&output);
    assert_eq!(stdout(&output), "count 9\n");

    // A secret file named by a variable that points nowhere is ignored
    let output = run(tierflag(&home).env("TIERFLAG_COUNT_FILE", home.path().join("missing")));
    assert_success(&output);
    assert_eq!(stdout(&output), "count not set\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_count_from_defaults_dir() {
    let home = TempDir::new().unwrap();
    let defaults = home.path().join(".config").join("tierflag").join("defaults");
    std::fs::create_dir_all(&defaults).unwrap();
    std::fs::write(defaults.join("count"), "6").unwrap();

    let output = run(&mut tierflag(&home));
    assert_success(&output);
    assert_eq!(stdout(&output), "count 6\n");
}

#[test]
fn test_split_single_argument() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).args(["split", "-H", "80"]));

    assert_success(&output);
    assert_eq!(stdout(&output), "count not set\nhorizontal 80\n");
}

#[test]
fn test_split_env_winner() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home)
        .env("TIERFLAG_SPLIT_V", "24")
        .args(["--count", "2", "split"]));

    assert_success(&output);
    assert_eq!(stdout(&output), "count 2\nvertical 24\n");
}

#[test]
fn test_split_conflict_in_args() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).args(["split", "--horizontal", "80", "--vertical", "24"]));

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("more than one flags are set in args (-horizontal,-vertical)"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_split_conflict_in_envs() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home)
        .env("TIERFLAG_SPLIT_HORIZONTAL", "80")
        .env("TIERFLAG_SPLIT_VERTICAL", "24")
        .arg("split"));

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("more than one flags are set in envs (-horizontal,-vertical)"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_split_argument_beats_env_conflict() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home)
        .env("TIERFLAG_SPLIT_HORIZONTAL", "80")
        .env("TIERFLAG_SPLIT_VERTICAL", "24")
        .args(["split", "--horizontal", "100"]));

    assert_success(&output);
    assert_eq!(stdout(&output), "count not set\nhorizontal 100\n");
}

#[test]
fn test_split_requires_direction() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).arg("split"));

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--horizontal or --vertical is required"));
}

#[test]
fn test_names_plain_output() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).args(["names", "target-id", "--prefix", "APP_"]));

    assert_success(&output);
    let stdout = stdout(&output);
    assert!(stdout.contains("Name:      --target-id"));
    assert!(stdout.contains("Aliases:   -ti"));
    assert!(stdout.contains("Env vars:  APP_TARGET_ID, APP_TI"));
    assert!(stdout.contains("File vars: APP_TARGET_ID_FILE, APP_TI_FILE"));
    assert!(stdout.contains("File:      (none)"));
}

#[test]
fn test_names_json_output() {
    let home = TempDir::new().unwrap();
    let secret = home.path().join("secret");
    std::fs::write(&secret, "s3cret").unwrap();

    let output = run(tierflag(&home)
        .env("EXAMPLE_HELLO_F_FILE", &secret)
        .args(["names", "flag", "--prefix", "EXAMPLE_", "--group", "hello", "--json"]));

    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "hello-flag");
    assert_eq!(value["aliases"], serde_json::json!(["hello-f"]));
    assert_eq!(
        value["env_vars"],
        serde_json::json!(["EXAMPLE_HELLO_FLAG", "EXAMPLE_HELLO_F"])
    );
    assert_eq!(
        value["file_vars"],
        serde_json::json!(["EXAMPLE_HELLO_FLAG_FILE", "EXAMPLE_HELLO_F_FILE"])
    );
    assert_eq!(value["file_path"], secret.to_string_lossy().as_ref());
}

/// Verify that stdout contains only user-facing output (no JSON logs)
/// and that stderr is empty by default (quiet mode)
#[test]
fn test_stdout_is_clean() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).args(["split", "-V", "10"]));

    assert_success(&output);
    assert!(
        !stdout(&output).contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout(&output)
    );
    assert!(
        stderr(&output).is_empty(),
        "stderr should be empty in quiet mode, got: {}",
        stderr(&output)
    );
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).args(["-v", "split", "-V", "10"]));

    assert_success(&output);
    assert_eq!(stdout(&output), "count not set\nvertical 10\n");
    assert!(stderr(&output).contains("core.app.startup_completed"));
    assert!(stderr(&output).contains("cli.split_completed"));
    assert!(stderr(&output).contains("core.resolve.completed"));
    assert!(stderr(&output).contains("vertical=argument"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    let output = run(tierflag(&home).args(["completions", "bash"]));

    assert_success(&output);
    assert!(stdout(&output).contains("tierflag"));
}
