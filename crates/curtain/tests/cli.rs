use std::path::PathBuf;
use std::process::Command;

fn scratch_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("curtain-cli-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("config.toml")
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_curtain"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute curtain");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("always-on-top overlay"));
    assert!(stdout.contains("init"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_curtain"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute curtain");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("curtain"));
}

#[test]
fn init_writes_config_once() {
    // Arrange
    let path = scratch_config("init");
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_curtain"))
            .arg("init")
            .arg("--config")
            .arg(&path)
            .output()
            .expect("failed to execute curtain")
    };

    // Act
    let first = run();
    let second = run();

    // Assert
    assert!(first.status.success());
    assert!(String::from_utf8_lossy(&first.stdout).contains("Created"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[interaction]"));

    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("Already exists"));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn init_force_overwrites() {
    // Arrange
    let path = scratch_config("force");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "# mine").unwrap();

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_curtain"))
        .args(["init", "--force", "--config"])
        .arg(&path)
        .output()
        .expect("failed to execute curtain");

    // Assert
    assert!(output.status.success());
    assert!(std::fs::read_to_string(&path).unwrap().contains("[appearance]"));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn malformed_geometry_is_a_usage_error() {
    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_curtain"))
        .args(["--geometry", "huge"])
        .output()
        .expect("failed to execute curtain");

    // Assert
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WIDTHxHEIGHT"));
}

#[test]
fn unknown_style_is_a_usage_error() {
    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_curtain"))
        .args(["run", "--style", "sparkly"])
        .output()
        .expect("failed to execute curtain");

    // Assert
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn missing_display_exits_with_failure() {
    // Arrange
    let path = scratch_config("no-display");

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_curtain"))
        .arg("--config")
        .arg(&path)
        .env_remove("DISPLAY")
        .output()
        .expect("failed to execute curtain");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open display"));
}
