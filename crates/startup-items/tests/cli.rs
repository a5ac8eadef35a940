use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_startup-items"))
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = bin();
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute startup-items");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("startup entries"));
    assert!(stdout.contains("links"));
    assert!(stdout.contains("elevate"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = bin();
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute startup-items");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("startup-items"));
}

#[test]
fn run_help_lists_edit_commands() {
    // Arrange
    let mut cmd = bin();
    cmd.args(["run", "--help"]);

    // Act
    let output = cmd.output().expect("failed to execute startup-items");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["list", "add", "remove", "set", "sync"] {
        assert!(stdout.contains(sub), "missing {sub}");
    }
}

#[test]
fn unknown_subcommand_fails() {
    // Arrange
    let mut cmd = bin();
    cmd.arg("frobnicate");

    // Act
    let output = cmd.output().expect("failed to execute startup-items");

    // Assert
    assert!(!output.status.success());
}

#[cfg(not(windows))]
#[test]
fn editing_commands_report_that_windows_is_required() {
    // Arrange
    let mut cmd = bin();
    cmd.args(["run", "list"]);

    // Act
    let output = cmd.output().expect("failed to execute startup-items");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only runs on Windows"));
}
