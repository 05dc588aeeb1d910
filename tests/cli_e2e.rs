#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn alertify(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("alertify").unwrap();
    cmd.current_dir(dir)
        .env_remove("ALERTIFY_FILE")
        .env_remove("ALERTIFY_BACKUP_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stored(dir: &Path) -> Vec<Value> {
    let content = fs::read_to_string(dir.join("reminders.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn add_then_list_shows_numbered_line() {
    let temp = TempDir::new().unwrap();

    alertify(temp.path())
        .args(["add", "Pay", "rent", "-d", "2024-01-01", "-p", "High"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminders"))
        .stdout(predicate::str::contains("Reminder added: Pay rent"))
        .stdout(predicate::str::contains(
            "01. Pay rent (Due: 2024-01-01, Priority: High, Status: Pending)",
        ));

    let reminders = stored(temp.path());
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["reminder"], "Pay rent");
    assert_eq!(reminders[0]["due"], "2024-01-01");
    assert_eq!(reminders[0]["priority"], "High");
    assert_eq!(reminders[0]["status"], "Pending");
    assert!(reminders[0]["id"].as_str().unwrap().len() == 36);
}

#[test]
fn no_arguments_lists_and_bootstraps() {
    let temp = TempDir::new().unwrap();

    alertify(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No reminders found."));

    assert!(stored(temp.path()).is_empty());
}

#[test]
fn completed_reminder_is_archived_by_list() {
    let temp = TempDir::new().unwrap();
    alertify(temp.path()).args(["add", "A"]).assert().success();
    alertify(temp.path()).args(["add", "B"]).assert().success();

    alertify(temp.path())
        .args(["set-status", "1", "Completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status of reminder 1 set to Completed."))
        .stdout(predicate::str::contains("01. B (Due: N/A, Priority: Medium, Status: Pending)"))
        .stdout(predicate::str::contains(". A (").not());

    alertify(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("01. B"))
        .stdout(predicate::str::contains(". A (").not());

    let reminders = stored(temp.path());
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["reminder"], "B");
}

#[test]
fn peek_keeps_completed_reminders() {
    let temp = TempDir::new().unwrap();
    alertify(temp.path()).args(["add", "A"]).assert().success();

    let id = stored(temp.path())[0]["id"].as_str().unwrap().to_string();
    fs::write(
        temp.path().join("reminders.json"),
        format!(
            r#"[{{"id":"{}","reminder":"A","due":"N/A","priority":"Medium","status":"Completed"}}]"#,
            id
        ),
    )
    .unwrap();

    alertify(temp.path())
        .args(["list", "--peek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reminders found."))
        .stdout(predicate::str::contains("will be archived"));
    assert_eq!(stored(temp.path()).len(), 1);

    alertify(temp.path()).arg("ls").assert().success();
    assert!(stored(temp.path()).is_empty());
}

#[test]
fn update_by_id_changes_only_given_fields() {
    let temp = TempDir::new().unwrap();
    alertify(temp.path())
        .args(["add", "Dentist", "-d", "2030-02-02"])
        .assert()
        .success();
    let id = stored(temp.path())[0]["id"].as_str().unwrap().to_string();

    alertify(temp.path())
        .args(["update", &id, "-p", "Low"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Reminder {} updated.", id)))
        .stdout(predicate::str::contains(
            "01. Dentist (Due: 2030-02-02, Priority: Low, Status: Pending)",
        ));
}

#[test]
fn lookup_failures_are_reported_but_not_fatal() {
    let temp = TempDir::new().unwrap();
    alertify(temp.path()).args(["add", "Only one"]).assert().success();
    let before = fs::read_to_string(temp.path().join("reminders.json")).unwrap();

    alertify(temp.path())
        .args(["remove", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No reminder found with serial number 5"));

    alertify(temp.path())
        .args(["update", "0", "-p", "High"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No reminder found with serial number 0"));

    alertify(temp.path())
        .args(["status", "1", "Finished"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid status: Finished"));

    let after = fs::read_to_string(temp.path().join("reminders.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn corrupt_store_is_fatal_and_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reminders.json");
    fs::write(&path, "{ not json").unwrap();

    alertify(temp.path())
        .args(["add", "Lost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error loading reminders"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn backup_then_restore_reproduces_file() {
    let temp = TempDir::new().unwrap();
    let live = temp.path().join("reminders.json");
    let backup = temp.path().join("reminders_backup.json");
    alertify(temp.path()).args(["add", "Keep"]).assert().success();
    let snapshot = fs::read_to_string(&live).unwrap();

    alertify(temp.path())
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup successful"));
    assert!(!live.exists());
    assert_eq!(fs::read_to_string(&backup).unwrap(), snapshot);

    alertify(temp.path())
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restore successful"));
    assert!(!backup.exists());
    assert_eq!(fs::read_to_string(&live).unwrap(), snapshot);
}

#[test]
fn restore_without_backup_reports_failure() {
    let temp = TempDir::new().unwrap();

    alertify(temp.path())
        .arg("restore")
        .assert()
        .success()
        .stderr(predicate::str::contains("no backup file"));
}

#[test]
fn reset_empties_the_file() {
    let temp = TempDir::new().unwrap();
    alertify(temp.path()).args(["add", "A"]).assert().success();
    alertify(temp.path()).args(["add", "B"]).assert().success();

    alertify(temp.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminders file reset successfully."));
    assert!(stored(temp.path()).is_empty());
}

#[test]
fn file_flag_and_config_choose_the_store() {
    let temp = TempDir::new().unwrap();

    alertify(temp.path())
        .args(["--file", "custom.json", "add", "Elsewhere"])
        .assert()
        .success();
    assert!(temp.path().join("custom.json").exists());
    assert!(!temp.path().join("reminders.json").exists());

    fs::write(
        temp.path().join("alertify.json"),
        r#"{"store_file": "custom.json"}"#,
    )
    .unwrap();
    alertify(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("01. Elsewhere"));

    alertify(temp.path()).arg("backup").assert().success();
    assert!(temp.path().join("custom_backup.json").exists());
}
