//! End-to-end tests for the partermai binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn partermai(args: &[&str], stdin: &str) -> Output {
    partermai_bytes(args, stdin.as_bytes())
}

fn partermai_bytes(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_partermai"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start partermai");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin)
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn version_prints_banner_without_reading_input() {
    let output = partermai(&["--no-color", "+version"], "");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(&format!("Partermai v{}", env!("CARGO_PKG_VERSION"))));
    assert!(!text.contains("PartermEdit"));
    assert!(!text.contains("PartermShell"));
}

#[test]
fn unknown_mode_is_usage_error() {
    let output = partermai(&["+bogus"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_mode_is_usage_error() {
    let output = partermai(&[], "");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn editor_without_filename_saves_nothing() {
    let output = partermai(&["--no-color", "+editor"], "hello\nworld\n");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Welcome to PartermEdit!"));
    assert!(text.contains("Input finished."));
    assert!(text.contains("No filename provided. Code not saved."));
    assert!(!text.contains("PartermShell"));
}

#[cfg(unix)]
#[test]
fn shell_runs_commands_until_exit() {
    let output = partermai(
        &["--no-color", "+shell"],
        "echo first\n\nfalse\necho second\n  exit  \necho never\n",
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Welcome to PartermShell!"));
    assert!(text.contains("first\n"));
    assert!(text.contains("Error executing command: `false` failed with exit status: 1"));
    assert!(text.contains("second\n"));
    assert!(text.ends_with("Exiting Partermai Shell...\n"));
    assert!(!text.contains("never"));
    assert!(!text.contains("PartermEdit"));
}

#[test]
fn shell_leaves_on_end_of_input() {
    let output = partermai(&["--no-color", "+shell"], "");
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Exiting Partermai Shell...\n"));
}

#[test]
fn shell_uses_prompt_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partermai.toml");
    std::fs::write(&path, "[shell]\nprompt = \"pm> \"\n").unwrap();

    let output = partermai(
        &["--no-color", "--config", path.to_str().unwrap(), "+shell"],
        "exit\n",
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("pm> Exiting Partermai Shell..."));
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partermai.toml");
    std::fs::write(&path, "[shell]\nprompt = \"\"\n").unwrap();

    let output = partermai(&["--config", path.to_str().unwrap(), "+version"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn dump_config_prints_toml() {
    let output = partermai(&["--no-color", "--dump-config"], "");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[shell]"));
    assert!(text.contains("color = false"));
}

#[test]
fn piped_output_has_no_color_codes() {
    let output = partermai(&["+shell"], "exit\n");
    assert!(output.status.success());
    assert!(!stdout(&output).contains('\u{1b}'));
}

#[test]
fn editor_survives_invalid_utf8_input() {
    let output = partermai_bytes(&["--no-color", "+editor"], b"first\n\xff\xfe\nlast\n");
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Input finished."));
    assert!(text.contains("No filename provided. Code not saved."));
}

#[cfg(unix)]
#[test]
fn shell_survives_invalid_utf8_input() {
    let output = partermai_bytes(&["--no-color", "+shell"], b"echo a\n\xff\necho b\nexit\n");
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("a\n"));
    assert!(text.contains("b\n"));
    assert!(text.ends_with("Exiting Partermai Shell...\n"));
}
