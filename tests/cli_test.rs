use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Run the binary with an isolated (missing) config file and no colors
fn tfplan(config_dir: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tfplan"))
        .args(args)
        .env("TFPLAN_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut handle = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            handle.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_version_and_help_exit_zero() {
    let dir = TempDir::new().unwrap();

    let version = tfplan(&dir, &["--version"], None);
    assert!(version.status.success());
    assert!(stdout(&version).contains(env!("CARGO_PKG_VERSION")));

    let help = tfplan(&dir, &["--help"], None);
    assert!(help.status.success());
    assert!(stdout(&help).contains("--html"));
}

#[test]
fn test_expanded_text_output() {
    let dir = TempDir::new().unwrap();
    let path = fixture("plan.json");
    let output = tfplan(&dir, &[path.to_str().unwrap()], None);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("▼ + aws_instance.web will be created"));
    assert!(text.contains("        ami: \"ami-12345678\""));
    assert!(text.contains("        id: (known after apply)"));
    assert!(text.contains("        encryption: null => \"AES256\""));
    assert!(text.contains("▼ -/+ module.db.aws_db_instance.main will be replaced"));
    assert!(text.contains("        password: (sensitive value) => (sensitive value)"));
    assert!(!text.contains("hunter2"));
    assert!(text.contains("▼ - aws_security_group.legacy will be destroyed"));
    assert!(!text.contains("aws_vpc.main"));
    assert!(text.contains("Plan: 1 to add, 2 to change, 1 to destroy."));
    assert!(text.contains("  + web_ip = (known after apply)"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_collapsed_from_stdin() {
    let dir = TempDir::new().unwrap();
    let json = std::fs::read_to_string(fixture("plan.json")).unwrap();
    let output = tfplan(&dir, &["-c", "-"], Some(&json));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("▶ ~ aws_s3_bucket.data will be changed"));
    assert!(!text.contains("versioning"));
}

#[test]
fn test_no_changes_message() {
    let dir = TempDir::new().unwrap();
    let path = fixture("no_changes.json");
    let output = tfplan(&dir, &[path.to_str().unwrap()], None);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No changes. Your infrastructure matches the configuration."));
}

#[test]
fn test_filter_by_address() {
    let dir = TempDir::new().unwrap();
    let path = fixture("plan.json");
    let output = tfplan(&dir, &["--filter", "^module\\.db\\.", path.to_str().unwrap()], None);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("module.db.aws_db_instance.main"));
    assert!(!text.contains("aws_instance.web"));
    assert!(text.contains("Plan: 0 to add, 1 to change, 0 to destroy."));
}

#[test]
fn test_html_to_stdout_and_file() {
    let dir = TempDir::new().unwrap();
    let path = fixture("plan.json");

    let output = tfplan(&dir, &["--html", path.to_str().unwrap()], None);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<strong>aws_instance.web</strong> will be created"));
    assert!(html.contains("Terraform 1.6.3"));

    let report = dir.path().join("out").join("plan.html");
    let output = tfplan(
        &dir,
        &["--html", "-o", report.to_str().unwrap(), path.to_str().unwrap()],
        None,
    );
    assert!(output.status.success());
    let written = std::fs::read_to_string(&report).unwrap();
    assert!(written.contains("toggleResource"));
}

#[test]
fn test_interactive_reads_commands() {
    let dir = TempDir::new().unwrap();
    let path = fixture("plan.json");
    let output = tfplan(&dir, &["-i", path.to_str().unwrap()], Some("1\nq\n"));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Interactive Plan (Enter number to toggle"));
    assert!(text.contains("[1] ▼ ~ aws_s3_bucket.data will be changed"));
    assert!(text.contains("versioning: false => true"));
    // piped stdout gets no screen-clearing escapes
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_interactive_rejects_stdin_plan() {
    let dir = TempDir::new().unwrap();
    let output = tfplan(&dir, &["-i", "-"], Some("{}"));

    assert!(!output.status.success());
    assert!(stderr(&output).contains("must come from a file"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let output = tfplan(&dir, &["-"], Some("this is not json"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not valid Terraform plan JSON"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = tfplan(&dir, &[missing.to_str().unwrap()], None);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing.json"));
}

#[test]
fn test_config_reset_and_show() {
    let dir = TempDir::new().unwrap();

    let output = tfplan(&dir, &["config", "reset", "--force"], None);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("[general]"));
    assert!(saved.contains("title = \"Terraform Plan\""));

    let output = tfplan(&dir, &["config", "show"], None);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Title: Terraform Plan"));
}

#[test]
fn test_config_collapsed_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[general]\ncollapsed = true\n").unwrap();
    let path = fixture("plan.json");
    let output = tfplan(&dir, &[path.to_str().unwrap()], None);

    assert!(output.status.success());
    assert!(stdout(&output).contains("▶ + aws_instance.web will be created"));
}
