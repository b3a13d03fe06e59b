use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn timetravel() -> Command {
    Command::cargo_bin("timetravel").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
        && Command::new("bash").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git").args(args).current_dir(dir).output().unwrap();
    assert!(out.status.success(), "git {args:?} failed");
    String::from_utf8(out.stdout).unwrap()
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

#[test]
fn script_orders_dates_and_counts_commits() {
    let script = stdout_of(timetravel().args([
        "--select",
        "2024-01-05=2",
        "--select",
        "2024-01-03",
        "script",
    ]));

    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("echo \"Creating 3 fake commits...\""));
    let early = script.find("for 2024-01-03").unwrap();
    let late = script.find("for 2024-01-05").unwrap();
    assert!(early < late);
    assert_eq!(script.matches("git commit -m").count(), 3);
}

#[test]
fn script_is_deterministic_across_runs() {
    let args = ["--select", "2023-03-01=3", "--select", "2023-02-01", "script"];
    assert_eq!(stdout_of(timetravel().args(args)), stdout_of(timetravel().args(args)));
}

#[test]
fn script_from_json_file_matches_select_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("selection.json");
    fs::write(&path, r#"{"2024-01-05": 2, "2024-01-03": 1}"#).unwrap();

    let from_file = stdout_of(timetravel().arg("--from").arg(&path).arg("script"));
    let from_flags = stdout_of(timetravel().args([
        "--select",
        "2024-01-03",
        "--select",
        "2024-01-05=2",
        "script",
    ]));
    assert_eq!(from_file, from_flags);
}

#[test]
fn script_output_writes_default_filename() {
    let dir = tempdir().unwrap();
    timetravel()
        .current_dir(dir.path())
        .args(["--select", "2024-02-29", "script", "--dialect", "batch", "--output"])
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("github-time-travel.bat")).unwrap();
    assert!(saved.starts_with("@echo off"));
    assert!(saved.contains("set GIT_COMMITTER_DATE=2024-02-29T12:00:00"));
    assert!(saved.contains("del temp_file_20240229_1.txt"));
}

#[test]
fn script_without_selection_fails() {
    timetravel().args(["--year", "2024", "script"]).assert().failure();
}

#[test]
fn selection_outside_year_fails() {
    timetravel()
        .args(["--year", "2024", "--select", "2023-12-31", "script"])
        .assert()
        .failure();
}

#[test]
fn invalid_date_is_rejected_by_parser() {
    timetravel()
        .args(["--select", "2023-02-29", "script"])
        .assert()
        .failure();
}

#[test]
fn grid_json_has_full_weeks() {
    let out = stdout_of(timetravel().args(["--year", "2024", "--select", "2024-03-10=2", "grid", "--json"]));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["year"], 2024);
    assert_eq!(v["total_commits"], 2);
    let weeks = v["weeks"].as_array().unwrap();
    assert!(weeks.iter().all(|w| w["days"].as_array().unwrap().len() == 7));

    let dated: Vec<&serde_json::Value> = weeks
        .iter()
        .flat_map(|w| w["days"].as_array().unwrap())
        .filter(|d| !d["date"].is_null())
        .collect();
    assert_eq!(dated.len(), 366);
    assert_eq!(dated[0]["date"], "2024-01-01");
    let selected: Vec<_> = dated.iter().filter(|d| d["selected"] == true).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0]["date"], "2024-03-10");
    assert_eq!(selected[0]["count"], 2);
}

#[test]
fn grid_ndjson_emits_one_week_per_line() {
    let out = stdout_of(timetravel().args(["--year", "2023", "grid", "--ndjson"]));
    let lines: Vec<&str> = out.lines().collect();
    // 2023 starts on a Sunday and ends on a Sunday.
    assert_eq!(lines.len(), 53);
    for line in lines {
        let week: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(week["days"].as_array().unwrap().len(), 7);
    }
}

#[test]
fn grid_text_shows_header() {
    let out = stdout_of(timetravel().args(["--year", "2024", "grid"]));
    assert!(out.contains("Contribution Graph 2024"));
    assert!(out.contains("Jan"));
}

#[test]
fn years_lists_ten_descending() {
    let out = stdout_of(timetravel().arg("years"));
    let years: Vec<i32> = out.lines().map(|l| l.trim().parse().unwrap()).collect();
    assert_eq!(years.len(), 10);
    assert!(years.windows(2).all(|w| w[0] == w[1] + 1));
}

#[test]
fn script_runs_in_git_repo() {
    if !has_git() {
        eprintln!("git or bash not available, skipping");
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());

    timetravel()
        .current_dir(dir.path())
        .args(["--select", "2024-01-05=2", "--select", "2024-01-03", "script", "--output"])
        .assert()
        .success();

    let status = Command::new("bash")
        .arg("github-time-travel.sh")
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let log = git(
        dir.path(),
        &["log", "--reverse", "--format=%ad|%cd|%s", "--date=iso"],
    );
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3, "{log}");
    let expected = [
        ("2024-01-03 12:00:00", "Time travel commit 1 for 2024-01-03"),
        ("2024-01-05 12:00:00", "Time travel commit 1 for 2024-01-05"),
        ("2024-01-05 12:00:00", "Time travel commit 2 for 2024-01-05"),
    ];
    for (line, (stamp, subject)) in lines.iter().zip(expected) {
        let fields: Vec<&str> = line.split('|').collect();
        assert!(fields[0].starts_with(stamp), "{line}");
        assert!(fields[1].starts_with(stamp), "{line}");
        assert_eq!(fields[2], subject);
    }

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("temp_file_"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn closed_stdout_exits_quietly() {
    let mut child = timetravel()
        .args(["--select", "2024-01-05=20000", "script"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let out = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
