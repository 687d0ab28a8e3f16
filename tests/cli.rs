//! Command-line behaviour of the podpanel binary that does not need a
//! terminal or a backend

use std::process::Command;

fn podpanel() -> Command {
    Command::new(env!("CARGO_BIN_EXE_podpanel"))
}

#[test]
fn test_init_config_writes_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let output = podpanel()
        .arg("--init-config")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[api]"));
    assert!(written.contains("base_url"));
    assert!(written.contains("[polling]"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Wrote default config"));
}

#[test]
fn test_init_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"http://10.0.0.5:9000\"\n").unwrap();

    let output = podpanel()
        .arg("--init-config")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    let kept = std::fs::read_to_string(&path).unwrap();
    assert!(kept.contains("10.0.0.5:9000"));
}

#[test]
fn test_help_lists_options() {
    let output = podpanel().arg("--help").output().unwrap();

    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("--api-url"));
    assert!(help.contains("--config"));
    assert!(help.contains("--init-config"));
}
