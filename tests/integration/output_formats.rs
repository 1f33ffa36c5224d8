use serde_json::Value;

use crate::common::{PANGRAM, TextFixture, readability};

fn json_output(args: &[&str], fixture: &TextFixture) -> Value {
    let output = readability()
        .args(["--format", "json"])
        .args(args)
        .arg(fixture.path())
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn json_reports_statistics_and_all_scores() {
    let fixture = TextFixture::new(PANGRAM);
    let json = json_output(&[], &fixture);

    assert_eq!(json["statistics"]["words"], 9);
    assert_eq!(json["statistics"]["sentences"], 1);
    assert_eq!(json["statistics"]["characters"], 36);
    assert_eq!(json["statistics"]["syllables"], 11);
    assert_eq!(json["statistics"]["polysyllables"], 0);

    let kinds: Vec<_> = json["scores"]
        .as_array()
        .expect("scores array")
        .iter()
        .map(|score| score["kind"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(kinds, ["ARI", "FK", "SMOG", "CL"]);
}

#[test]
fn json_honours_score_flag() {
    let fixture = TextFixture::new(PANGRAM);
    let json = json_output(&["--score", "CL"], &fixture);

    let scores = json["scores"].as_array().expect("scores array");
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["kind"], "CL");
    assert!(scores[0]["value"].is_f64());
    assert!(scores[0]["age"].is_u64());
}

#[test]
fn json_reports_input_path() {
    let fixture = TextFixture::new("Short. Text.");
    let json = json_output(&[], &fixture);

    assert_eq!(json["file"], fixture.path().to_string_lossy().as_ref());
}
