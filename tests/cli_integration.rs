use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn snipz(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snipz").unwrap();
    cmd.current_dir(dir.path())
        .env("SNIPZ_CONFIG_DIR", dir.path().join("config"))
        .env_remove("SNIPZ_FILE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_first_run_lists_seed_snippets() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("example snippets"))
        .stdout(predicate::str::contains("Docker Compose шаблон"));

    assert!(dir.path().join("snippets.json").exists());
}

#[test]
fn test_add_from_stdin_then_show() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .args(["add", "--title", "Hello", "--language", " Rust ", "--tags", "demo, cli"])
        .write_stdin("fn main() {\n    println!(\"hi\");\n}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet added (#9): Hello"));

    snipz(&dir)
        .args(["show", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust | #demo #cli"))
        .stdout(predicate::str::contains("    println!(\"hi\");"));
}

#[test]
fn test_add_reports_missing_fields() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .args(["add", "--title", "  "])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required fields: title, language, code",
        ));

    let raw = fs::read_to_string(dir.path().join("snippets.json")).unwrap();
    let snippets: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(snippets.len(), 8);
}

#[test]
fn test_search_with_language_filter() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .args(["search", "python", "--language", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Python HTTP сервер"))
        .stdout(predicate::str::contains("Python virtualenv"))
        .stdout(predicate::str::contains("декоратор").not());
}

#[test]
fn test_languages_lists_counts() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("all (8)"))
        .stdout(predicate::str::contains("bash (5)"))
        .stdout(predicate::str::contains("sql (1)"));
}

#[test]
fn test_edit_and_delete() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .args(["edit", "3", "--title", "Undo commit", "--clear-tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet updated (#3): Undo commit"));

    snipz(&dir)
        .args(["delete", "3", "77"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet deleted (#3): Undo commit"))
        .stdout(predicate::str::contains("Snippet #77 not found"));

    snipz(&dir)
        .args(["list", "-l", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Undo commit").not());
}

#[test]
fn test_malformed_file_warns_and_recovers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("snippets.json"), "not json at all").unwrap();

    snipz(&dir)
        .args(["add", "-t", "Fresh", "-l", "sh", "-c", "echo ok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starting with no snippets"))
        .stdout(predicate::str::contains("Snippet added (#1): Fresh"));

    snipz(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh"))
        .stdout(predicate::str::contains("starting with no snippets").not());
}

#[test]
fn test_file_flag_and_config_default_language() {
    let dir = TempDir::new().unwrap();

    snipz(&dir)
        .args(["config", "default-language", "SQL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-language set to sql"));

    snipz(&dir)
        .args(["--file", "other.json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL выборка с JOIN"))
        .stdout(predicate::str::contains("Docker Compose").not());

    assert!(dir.path().join("other.json").exists());
    assert!(!dir.path().join("snippets.json").exists());
}
