use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomowatch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomowatch").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_status_defaults() {
    let home = TempDir::new().unwrap();
    let out = pomowatch(&home)
        .args(["-o", "json", "status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value["phase"], "focus");
    assert_eq!(value["remaining"], 1500);
    assert_eq!(value["remaining_display"], "25:00");
    assert_eq!(value["running"], false);
}

#[test]
fn test_simulate_full_focus_phase() {
    let home = TempDir::new().unwrap();
    let out = pomowatch(&home)
        .args(["-o", "json", "simulate", "--ticks", "1500"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value["remaining"], 0);
    assert_eq!(value["progress"], 1.0);
    assert_eq!(value["running"], true);
    assert_eq!(value["phase"], "focus");
}

#[test]
fn test_simulate_switch_while_running() {
    let home = TempDir::new().unwrap();
    let out = pomowatch(&home)
        .args(["-o", "json", "simulate", "--ticks", "30", "--switch-after", "30"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value = json(&out);
    assert_eq!(value["running"], false);
    assert_eq!(value["phase"], "short_break");
    assert_eq!(value["remaining"], 300);
}

#[test]
fn test_duration_flags_are_clamped() {
    let home = TempDir::new().unwrap();
    let out = pomowatch(&home)
        .args(["-o", "json", "--focus", "2h", "status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(json(&out)["remaining"], 3600);
}

#[test]
fn test_config_file_is_read() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".pomowatch");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.yaml"),
        "durations:\n  short_break_minutes: 10\ngeneral:\n  default_output: json\n",
    )
    .unwrap();

    let out = pomowatch(&home)
        .args(["status", "--phase", "short"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(json(&out)["remaining"], 600);
}

#[test]
fn test_explicit_config_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.yaml");
    std::fs::write(&path, "session:\n  advance: auto\n  long_break_after: 2\n").unwrap();

    pomowatch(&home)
        .args(["-o", "json", "--config"])
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"long_break_after\": 2"))
        .stdout(predicate::str::contains("\"loaded\": true"));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.yaml");
    std::fs::write(&path, "durations: [1, 2").unwrap();

    pomowatch(&home)
        .arg("--config")
        .arg(&path)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_phases_table() {
    let home = TempDir::new().unwrap();
    pomowatch(&home)
        .args(["--long-break", "20", "phases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Short Break"))
        .stdout(predicate::str::contains("20 minutes"));
}

#[test]
fn test_unknown_phase_rejected() {
    let home = TempDir::new().unwrap();
    pomowatch(&home)
        .args(["status", "--phase", "nap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown phase"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    pomowatch(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomowatch"));

    pomowatch(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_zero_duration_flag_rejected() {
    let home = TempDir::new().unwrap();
    pomowatch(&home)
        .args(["--focus", "0", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration '0'"));
}
