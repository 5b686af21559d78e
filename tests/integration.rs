use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

const TWO_FINDINGS: &str = r#"[
    {"level": "error", "header": "app.js", "column": 5, "message": "Missing semicolon.", "ruleId": "semi"},
    {"level": "warn", "header": "app.js", "column": 10, "message": "Unused variable.", "ruleId": "no-unused-vars"}
]"#;

const ONE_WARNING: &str = r#"[
    {"level": "warn", "header": "app.js", "column": 10, "message": "Unused variable.", "ruleId": "no-unused-vars"}
]"#;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("lintfmt")
}

mod stylish_report {
    use super::*;

    #[test]
    fn test_errors_fail_with_report() {
        cmd()
            .write_stdin(TWO_FINDINGS)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("2 problems (1 error, 1 warning)"))
            .stdout(predicate::str::contains("no-unused-vars"));
    }

    #[test]
    fn test_rows_are_aligned() {
        cmd()
            .write_stdin(TWO_FINDINGS)
            .assert()
            .stdout(predicate::str::contains(
                "  app.js  5   error    Missing semicolon  semi\n",
            ))
            .stdout(predicate::str::contains(
                "  app.js  10  warning  Unused variable    no-unused-vars\n",
            ));
    }

    #[test]
    fn test_trailing_period_is_stripped() {
        cmd()
            .write_stdin(TWO_FINDINGS)
            .assert()
            .stdout(predicate::str::contains("Missing semicolon.").not());
    }

    #[test]
    fn test_position_join() {
        let findings = r#"[
            {"level": "error", "header": "app.js:12", "column": 5, "message": "boom"}
        ]"#;

        cmd()
            .write_stdin(findings)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("app.js:12:5"));
    }

    #[test]
    fn test_warnings_only_passes() {
        cmd()
            .write_stdin(ONE_WARNING)
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::contains("1 problem (0 errors, 1 warning)"));
    }

    #[test]
    fn test_strict_mode_fails_on_warnings() {
        cmd()
            .arg("--strict")
            .write_stdin(ONE_WARNING)
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_empty_findings_produce_no_output() {
        cmd()
            .write_stdin("[]")
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::is_empty());
    }
}

mod color {
    use super::*;

    #[test]
    fn test_color_always_emits_ansi() {
        cmd()
            .arg("--color")
            .arg("always")
            .write_stdin(TWO_FINDINGS)
            .assert()
            .stdout(predicate::str::contains("\u{1b}[31m"))
            .stdout(predicate::str::contains("\u{1b}[1m"));
    }

    #[test]
    fn test_piped_output_is_plain() {
        cmd()
            .write_stdin(TWO_FINDINGS)
            .assert()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn test_color_never_is_plain() {
        cmd()
            .arg("--color")
            .arg("never")
            .write_stdin(TWO_FINDINGS)
            .assert()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

mod json_format {
    use super::*;

    #[test]
    fn test_json_output() {
        let output = cmd()
            .arg("--format")
            .arg("json")
            .write_stdin(TWO_FINDINGS)
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["summary"]["errors"], 1);
        assert_eq!(json["summary"]["warnings"], 1);
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["findings"][0]["ruleId"], "semi");
        assert_eq!(json["findings"][0]["message"], "Missing semicolon.");
    }

    #[test]
    fn test_json_output_empty() {
        let output = cmd()
            .arg("--format")
            .arg("json")
            .write_stdin("[]")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["summary"]["total"], 0);
        assert!(json["findings"].as_array().unwrap().is_empty());
    }
}

mod io {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_findings_file() {
        let findings = fixtures_path().join("findings.json");

        cmd()
            .arg(findings)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("2 problems (1 error, 1 warning)"));
    }

    #[test]
    fn test_missing_file_exits_2() {
        cmd()
            .arg("/nonexistent/findings.json")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to read findings file"));
    }

    #[test]
    fn test_invalid_json_exits_2() {
        cmd()
            .write_stdin("not json")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid findings JSON"));
    }

    #[test]
    fn test_empty_stdin_exits_2() {
        cmd()
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid findings JSON"));
    }

    #[test]
    fn test_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("report.txt");

        cmd()
            .arg("--output")
            .arg(&report_path)
            .write_stdin(TWO_FINDINGS)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Report written to"));

        let report = fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("2 problems (1 error, 1 warning)"));
    }

    #[test]
    fn test_unwritable_output_exits_2() {
        cmd()
            .arg("--output")
            .arg("/nonexistent/dir/report.txt")
            .write_stdin(TWO_FINDINGS)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to write report"));
    }
}

mod cli_options {
    use super::*;

    #[test]
    fn test_version_flag() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_help_flag() {
        cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("aligned"));
    }
}
