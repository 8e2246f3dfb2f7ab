//! CLI integration tests for hq commands.
//!
//! These tests focus on exit codes and the key lines of each command's
//! output, not exact formatting.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get an hq command.
fn hq() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("hq").unwrap()
}

/// Runs `hq` inside `dir`, with HOME pointing there too.
fn hq_in(dir: &Path) -> Command {
    let mut cmd = hq();
    cmd.env("HOME", dir).current_dir(dir);
    cmd
}

/// Writes a `.hq.toml` that stops discovery at `dir`.
fn write_config(dir: &Path, search: &str) {
    fs::write(
        dir.join(".hq.toml"),
        format!("root = true\n\n[search]\n{search}"),
    )
    .unwrap();
}

/// Runs `hq explain --json` and parses the output.
fn explain_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = hq_in(dir)
        .arg("explain")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

mod explain {
    use super::*;

    #[test]
    fn plain_words_get_phrase_boost() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "java editor", "--no-stop-words"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Query string: (+contents:java +contents:editor) contents:\"java editor\"^10",
            ))
            .stdout(predicate::str::contains("Highlight:    java editor"));
    }

    #[test]
    fn named_field_is_boosted() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "java", "-f", "title", "--no-stop-words"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Fields:       title^5 contents"))
            .stdout(predicate::str::contains("title:java^5 contents:java"));
    }

    #[test]
    fn no_improve_ranking_drops_phrase() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "java editor", "--no-stop-words", "--no-improve-ranking"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Query string: +contents:java +contents:editor\n",
            ));
    }

    #[test]
    fn prohibited_only_query_has_no_tree() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "NOT java", "--no-stop-words"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Query string: (no query)"))
            .stdout(predicate::str::contains("Highlight:    java"));
    }

    #[test]
    fn stemming_applies() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "editors", "--no-stop-words"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Normalized:   [editor]"));
    }

    #[test]
    fn unterminated_quote_warns() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "java \"content assist", "--no-stop-words"])
            .assert()
            .success()
            .stderr(predicate::str::contains("warning: unterminated quote"))
            .stdout(predicate::str::contains("Lexical:      [java]\n"));
    }

    #[test]
    fn uppercase_wildcard_warns() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "Edit* java", "--no-stop-words"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "warning: wildcard 'Edit*' is matched case-sensitively",
            ))
            .stdout(predicate::str::contains("contents:Edit*"));
    }

    #[test]
    fn lowercase_wildcard_is_quiet() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "edit*", "--no-stop-words"])
            .assert()
            .success()
            .stderr(predicate::str::contains("wildcard").not());
    }

    #[test]
    fn json_output() {
        let dir = temp_dir();
        let value = explain_json(dir.path(), &["\"content assist\" OR java", "--no-stop-words"]);
        assert_eq!(value["raw"], "\"content assist\" OR java");
        assert_eq!(value["lexical"][0]["kind"], "phrase");
        assert_eq!(value["lexical"][1]["kind"], "or");
        assert_eq!(value["highlight_terms"], "content assist java");
        assert_eq!(value["unterminated_quote"], false);
        assert_eq!(value["fields"][0]["name"], "contents");
        assert!(value["tree"].is_object());
        assert!(value["query_string"].is_string());
    }

    #[test]
    fn json_without_tree() {
        let dir = temp_dir();
        let value = explain_json(dir.path(), &["NOT java", "--no-stop-words"]);
        assert!(value["tree"].is_null());
        assert!(value["query_string"].is_null());
    }

    #[test]
    fn config_fields_are_used() {
        let dir = temp_dir();
        write_config(dir.path(), "fields = \"title\"\nfield_boost = 3.0\nstop_words = false\n");
        hq_in(dir.path())
            .args(["explain", "java"])
            .assert()
            .success()
            .stdout(predicate::str::contains("title:java^3 contents:java"));
    }

    #[test]
    fn flags_override_config() {
        let dir = temp_dir();
        write_config(dir.path(), "fields = \"title\"\nstop_words = false\n");
        let value = explain_json(dir.path(), &["java", "-f", "summary", "--field-search-only"]);
        assert_eq!(value["fields"].as_array().unwrap().len(), 1);
        assert_eq!(value["fields"][0]["name"], "summary");
    }

    #[test]
    fn unknown_stemmer_fails() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "java", "--stemmer", "klingon"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported stemmer language: klingon"));
    }

    #[test]
    fn field_search_only_without_fields_fails() {
        let dir = temp_dir();
        hq_in(dir.path())
            .args(["explain", "java", "--field-search-only"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid search fields"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join(".hq.toml"), "root = true\n[search\n").unwrap();
        hq_in(dir.path())
            .args(["explain", "java"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_defaults() {
        let dir = temp_dir();
        hq_in(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[search]"))
            .stdout(predicate::str::contains("default_field = \"contents\""))
            .stdout(predicate::str::contains("stemmer = \"english\""));
    }

    #[test]
    fn shows_merged_settings() {
        let dir = temp_dir();
        write_config(dir.path(), "stemmer = \"german\"\n");
        hq_in(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("stemmer = \"german\""));
    }

    #[test]
    fn warns_about_suspicious_settings() {
        let dir = temp_dir();
        write_config(dir.path(), "fields = [\"title\", \"title\"]\n");
        hq_in(dir.path())
            .arg("config")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "warning: field 'title' is listed more than once",
            ));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();
        let work = dir.path().join("project");
        fs::create_dir(&work).unwrap();

        hq()
            .env("HOME", dir.path())
            .current_dir(&work)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let contents = fs::read_to_string(work.join(".hq.toml")).unwrap();
        assert!(contents.contains("# [search]"));
        assert!(contents.contains("# stemmer = \"english\""));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".hq.toml"), "existing").unwrap();

        hq_in(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        let contents = fs::read_to_string(dir.path().join(".hq.toml")).unwrap();
        assert_eq!(contents, "existing");
    }

    #[test]
    fn force_overwrites_even_invalid_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".hq.toml"), "[search\n").unwrap();

        hq_in(dir.path()).args(["init", "--force"]).assert().success();

        let contents = fs::read_to_string(dir.path().join(".hq.toml")).unwrap();
        assert!(contents.contains("# [search]"));
    }

    #[test]
    fn written_template_loads() {
        let dir = temp_dir();
        hq_in(dir.path()).arg("init").assert().success();

        hq_in(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("stemmer = \"english\""));
    }
}
