use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

const HOOK_ENV: &str = "FEISHU_WEBHOOK";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("reminder_cli").unwrap();
    cmd.env_remove(HOOK_ENV).env_remove("RUST_LOG");
    for proxy in ["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(proxy);
    }
    cmd
}

/// A URL on a port nothing listens on.
fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/hook", listener.local_addr().unwrap());
    drop(listener);
    url
}

fn write_config(dir: &tempfile::TempDir, toml: &str) -> PathBuf {
    let path = dir.path().join("reminder.toml");
    fs::write(&path, toml).unwrap();
    path
}

#[rstest]
#[case(&["--help"], "Usage:", "stdout")]
#[case(&[], "Known tasks: morning_8", "stderr")]
#[case(&["bogus"], "Unknown task \"bogus\"", "stderr")]
#[case(&["morning_8"], "export FEISHU_WEBHOOK=", "stderr")]
#[case(&["--list"], "morning_930_check", "stdout")]
#[case(&["--dry-run", "--date", "2026-02-13", "morning_8"], "0.5 片", "stdout")]
#[case(&["--dry-run", "--date", "2026-02-11", "morning_8"], "尚未开始", "stdout")]
#[case(&["--dry-run", "night_2230_check"], "\"orange\"", "stdout")]
fn cli_table_cases(#[case] args: &[&str], #[case] needle: &str, #[case] stream: &str) {
    let assert = cmd().args(args).assert().code(0);
    match stream {
        "stdout" => {
            assert.stdout(predicate::str::contains(needle));
        }
        "stderr" => {
            assert.stderr(predicate::str::contains(needle));
        }
        other => panic!("unknown stream: {other}"),
    }
}

#[test]
fn delivery_failure_still_exits_zero() {
    cmd()
        .env(HOOK_ENV, dead_url())
        .arg("evening_1830")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("could not be delivered"));
}

#[test]
fn json_mode_reports_structured_outcome() {
    let out = cmd()
        .args(["--json", "morning_8_check"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let line = String::from_utf8(out).unwrap();
    let v: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(v["result"], "skipped");
    assert_eq!(v["reason"], "MissingEndpoint");
    assert_eq!(v["slot"], "morning_8_check");
}

#[test]
fn dry_run_prints_full_card() {
    let out = cmd()
        .args(["--dry-run", "--date", "2026-02-20", "morning_8"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["msg_type"], "interactive");
    assert_eq!(v["card"]["header"]["template"], "red");
    let body = v["card"]["elements"][0]["text"]["content"].as_str().unwrap();
    assert!(body.contains("💊 1 片 (整片)"));
    assert!(body.starts_with("<at id='all'></at>"));
}

#[test]
fn custom_config_and_env_name_are_honored() {
    let dir = tempdir().unwrap();
    let cfg = write_config(
        &dir,
        r#"
[webhook]
url_env = "MY_TEAM_HOOK"

[[slots]]
id = "lunch"
title = "Lunch"
body = "take {dose}"
"#,
    );
    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("lunch")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("export MY_TEAM_HOOK="));

    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("morning_8")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Known tasks: lunch"));
}

#[test]
fn invalid_config_is_fatal() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "[[slots]]\nid = \"a\"\ntitle = \"t\"\nbody = \"\"\n");
    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn unparsable_config_is_fatal() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "[card]\nordinary_color = \"pink\"\n");
    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid TOML"));
}

#[test]
fn bad_date_is_a_usage_error() {
    cmd()
        .args(["--date", "13/02/2026", "morning_8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date"));
}

#[test]
fn unopenable_log_file_is_fatal() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let log = blocker.join("sub").join("app.log");
    let cfg = write_config(
        &dir,
        &format!(
            "[logging]\nfile = '{}'\n\n[[slots]]\nid = \"a\"\ntitle = \"t\"\nbody = \"b\"\n",
            log.display()
        ),
    );
    cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("log file could not be opened"));
}

#[test]
fn rotating_log_file_receives_debug_events() {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");
    let cfg = write_config(
        &dir,
        &format!(
            "[logging]\nfile = '{}'\nrotation = \"daily\"\n\n[[slots]]\nid = \"a\"\ntitle = \"t\"\nbody = \"b\"\n",
            logs.join("app.log").display()
        ),
    );
    cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["--log-level", "debug", "--list"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("a "));

    let written: Vec<_> = fs::read_dir(&logs)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("app.log"))
        })
        .collect();
    assert_eq!(written.len(), 1, "{written:?}");
    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(content.contains("starting"), "{content}");
}
