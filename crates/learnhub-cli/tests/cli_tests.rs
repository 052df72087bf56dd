//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn learnhub() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("learnhub").unwrap();
    cmd.env_remove("LEARNHUB_SEED")
        .env_remove("LEARNHUB_SHOW_HINTS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn modes_lists_all_twenty() {
    learnhub()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("fill-blanks"))
        .stdout(predicate::str::contains("timer-challenge"))
        .stdout(predicate::str::contains("Daily Challenge"))
        .stdout(predicate::str::contains("20 learning modes."));
}

#[test]
fn chapters_for_one_subject() {
    learnhub()
        .args(["chapters", "--subject", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History (5 chapters)"))
        .stdout(predicate::str::contains("Print Culture and the Modern World"))
        .stdout(predicate::str::contains("Mathematics").not());
}

#[test]
fn chapters_unknown_subject() {
    learnhub()
        .args(["chapters", "--subject", "geography"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown subject: geography"));
}

#[test]
fn show_generic_content() {
    learnhub()
        .args(["show", "flashcards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flashcards (flashcard)"));
}

#[test]
fn show_with_chapter_context() {
    learnhub()
        .args([
            "show",
            "fill-blanks",
            "--subject",
            "mathematics",
            "--chapter",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mathematics - Chapter 4: Quadratic Equations",
        ))
        .stdout(predicate::str::contains(
            "The main concept of Quadratic Equations is _____.",
        ));
}

#[test]
fn show_json() {
    let output = learnhub()
        .args(["show", "speed-test", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "timer-challenge");
    assert_eq!(json["content"]["duration"], 300);
}

#[test]
fn show_unknown_mode_is_configuration_error() {
    learnhub()
        .args(["show", "not-a-real-mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configuration Error: no configuration found for learning mode 'not-a-real-mode'",
        ));
}

#[test]
fn show_unknown_chapter() {
    learnhub()
        .args(["show", "quiz", "--subject", "history", "--chapter", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown chapter '9' in History"));
}

#[test]
fn play_mcq_script() {
    learnhub()
        .args(["play", "--script", "../../scripts/mcq.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== MCQ Practice =="))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains(
            "Quiz Complete! Your final score: 1 out of 2 (50%)",
        ));
}

#[test]
fn play_fill_blanks_script() {
    learnhub()
        .args(["play", "--script", "../../scripts/fill-blanks.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hint: It starts with N"))
        .stdout(predicate::str::contains(
            "Exercise Complete! Your final score: 1 out of 2 (50%)",
        ));
}

#[test]
fn play_timer_script() {
    learnhub()
        .args(["play", "--script", "../../scripts/speed-test.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4:58 remaining | Answered: 1 of 2"))
        .stdout(predicate::str::contains("(nothing to do)"));
}

#[test]
fn play_notes_script_with_context() {
    learnhub()
        .args(["play", "--script", "../../scripts/notes.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Science - Chapter 11: Electricity"))
        .stdout(predicate::str::contains("All Points Reviewed!"));
}

#[test]
fn play_from_stdin() {
    learnhub()
        .args(["play", "true-false"])
        .write_stdin("false\ncheck\nflip\nnext\ntrue\ncheck\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid Action: 'flip' is not a valid action for a true-false activity",
        ))
        .stdout(predicate::str::contains(
            "Exercise Complete! Your final score: 2 out of 2 (100%)",
        ));
}

#[test]
fn play_reports_bad_input_and_continues() {
    learnhub()
        .args(["play", "flashcards"])
        .write_stdin("dance\nflip\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Action: invalid event: unknown command 'dance'"))
        .stdout(predicate::str::contains("[Back]"));
}

#[test]
fn play_without_mode_or_script() {
    learnhub()
        .arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no learning mode given"));
}

#[test]
fn play_timer_ignores_typed_ticks_while_counting_down() {
    learnhub()
        .args(["play", "speed-test"])
        .write_stdin("start\ntick\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5:00 remaining | Answered: 0 of 2"))
        .stdout(predicate::str::contains("(nothing to do)"));
}

#[test]
fn play_timer_shows_ready_before_start() {
    learnhub()
        .args(["play", "speed-test"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ready to start? 2 questions, 5:00 on the clock.",
        ))
        .stdout(predicate::str::contains("paused").not());
}

#[test]
fn validate_chapter_without_subject_names_default_subject() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chapter.toml");
    std::fs::write(
        &path,
        "events = [\"select 0\"]\n\n[session]\nmode = \"mcq\"\nchapter = 3\n",
    )
    .unwrap();

    learnhub()
        .arg("validate")
        .arg("--script")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "chapter is set without a subject, default_subject from learnhub.toml is required",
        ));
}

#[test]
fn play_chapter_without_subject_needs_default_subject() {
    let dir = TempDir::new().unwrap();
    learnhub()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["play", "mcq", "--chapter", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--chapter needs --subject"));
}

#[test]
fn play_hints_disabled_by_env() {
    learnhub()
        .args(["play", "fill-blanks"])
        .env("LEARNHUB_SHOW_HINTS", "false")
        .write_stdin("hint\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(nothing to do)"))
        .stdout(predicate::str::contains("Hint:").not());
}

#[test]
fn validate_scripts_directory() {
    learnhub()
        .args(["validate", "--script", "../../scripts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mcq mode, 6 events"))
        .stdout(predicate::str::contains("speed-test mode"))
        .stdout(predicate::str::contains("All scripts valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        "events = [\"flip\", \"select 1\"]\n\n[session]\nmode = \"flashcards\"\n",
    )
    .unwrap();

    learnhub()
        .arg("validate")
        .arg("--script")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[event 2] WARNING: 'select 1' is not a valid action for a flashcard activity",
        ))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    learnhub()
        .args(["validate", "--script", "/nonexistent/path.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read script file"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    learnhub()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created learnhub.toml"))
        .stdout(predicate::str::contains("Created scripts/example.toml"));

    assert!(dir.path().join("learnhub.toml").exists());

    learnhub()
        .current_dir(dir.path())
        .args(["validate", "--script", "scripts/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All scripts valid."));

    learnhub()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn config_file_sets_default_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "default_format = \"json\"\n").unwrap();

    learnhub()
        .args(["show", "match", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"match\""));
}

#[test]
fn config_found_in_current_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("learnhub.toml"), "default_format = \"json\"\n").unwrap();

    learnhub()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["show", "true-false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"true-false\""));
}
