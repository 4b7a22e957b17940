//! End-to-end tests for the static export binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn export() -> Command {
    let mut cmd = cargo_bin_cmd!("bootcamp-landing-export");
    cmd.env_remove("RUST_LOG");
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        export()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--show-mentors"))
            .stdout(predicate::str::contains("--out"));
    }

    #[test]
    fn shows_version() {
        export()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod output {
    use super::*;

    #[test]
    fn writes_page_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("index.html");

        export().arg("-o").arg(&out).assert().success();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="apply""#));
        assert!(!html.contains("Meet Your Mentors"));
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist/site/index.html");

        export().arg("--out").arg(&out).assert().success();

        assert!(out.is_file());
    }

    #[test]
    fn dash_writes_to_stdout() {
        export()
            .args(["-o", "-"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(r#"id="faq""#));
    }

    #[test]
    fn logs_stay_off_stdout() {
        export()
            .args(["-o", "-", "--log-level", "debug"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"));
    }
}

mod config {
    use super::*;

    #[test]
    fn show_mentors_flag_renders_carousel() {
        export()
            .args(["-o", "-", "--show-mentors"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Meet Your Mentors"))
            .stdout(predicate::str::contains(r#"id="mentors""#));
    }

    #[test]
    fn config_file_is_applied() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("page.json");
        fs::write(&config, r#"{ "show_mentors": true, "reveal_margin_px": -80 }"#).unwrap();

        export()
            .args(["-o", "-", "-c"])
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("Meet Your Mentors"))
            .stdout(predicate::str::contains(r#"data-reveal-margin="-80""#));
    }

    #[test]
    fn malformed_config_fails() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("page.json");
        fs::write(&config, "{ show_mentors: yes").unwrap();

        export()
            .args(["-o", "-", "--config"])
            .arg(&config)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("invalid config JSON"));
    }

    #[test]
    fn negative_stagger_fails() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("page.json");
        fs::write(&config, r#"{ "stagger_step": -1 }"#).unwrap();

        export()
            .args(["-o", "-", "-c"])
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("stagger_step"));
    }

    #[test]
    fn missing_config_reports_path() {
        export()
            .args(["-o", "-", "-c", "/no/such/page.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("/no/such/page.json"));
    }
}
