use predicates::prelude::*;

use crate::common::{PANGRAM, TextFixture, readability};

#[test]
fn prints_statistics_then_prompts() {
    let fixture = TextFixture::new(PANGRAM);

    readability()
        .arg(fixture.path())
        .write_stdin("ARI\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Words: 9\nSentences: 1\nCharacters: 36\nSyllables: 11\nPolysyllables: 0\n\
             Enter the score you want to calculate (ARI, FK, SMOG, CL, all):\n",
        ))
        .stdout(predicate::str::contains("Automated Readability Index: "))
        .stdout(predicate::str::contains("Flesch–Kincaid").not());
}

#[test]
fn answer_all_prints_every_score() {
    let fixture = TextFixture::new(PANGRAM);

    readability()
        .arg(fixture.path())
        .write_stdin("all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Automated Readability Index: "))
        .stdout(predicate::str::contains("Flesch–Kincaid readability tests: "))
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook: "))
        .stdout(predicate::str::contains("Coleman–Liau index: "));
}

#[test]
fn unknown_answer_falls_back_to_all_with_warning() {
    let fixture = TextFixture::new(PANGRAM);

    readability()
        .arg(fixture.path())
        .write_stdin("grade level\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coleman–Liau index: "))
        .stderr(predicate::str::contains("Unknown score selector"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn score_flag_skips_prompt() {
    let fixture = TextFixture::new(PANGRAM);

    readability()
        .args(["--score", "smog"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the score").not())
        .stdout(predicate::str::contains(
            "Simple Measure of Gobbledygook: 3.13 (about 9-year-olds).",
        ));
}

#[test]
fn empty_file_prints_nothing() {
    let fixture = TextFixture::new("");

    readability().arg(fixture.path()).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn whitespace_only_file_prints_nothing() {
    let fixture = TextFixture::new("  \n\t\n");

    readability().arg(fixture.path()).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn unreadable_file_is_an_error() {
    let fixture = TextFixture::new("unused");
    let missing = fixture.dir().join("missing.txt");

    readability()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read file"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn directory_argument_is_rejected() {
    let fixture = TextFixture::new("unused");

    readability()
        .arg(fixture.dir())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn text_without_words_cannot_be_scored() {
    let fixture = TextFixture::new("...");

    readability()
        .args(["--score", "all"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Words: 0"))
        .stderr(predicate::str::contains("no words found"));
}
