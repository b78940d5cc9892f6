//! End-to-end rendering tests through the public API.

use pawreport::{render, render_with_options, RenderOptions, ReportData};
use std::collections::BTreeMap;

fn full_report() -> ReportData {
    let json = r#"{
        "pet_name": "Biscuit",
        "profile_title": "The Social Dynamo",
        "profile_tagline": "Life of every party, napper of none.",
        "dimensions": {"SOC": 80, "ENG": 40, "ATT": 60, "SEN": 20, "INT": 90},
        "dimension_notes": {"SOC": "Biscuit actively seeks out new people and dogs."},
        "strengths": [
            "Greets strangers calmly",
            "Learns new cues in minutes",
            "Settles quickly after play"
        ],
        "watch_points": [
            "May guard toys around other dogs",
            "Gets vocal when left alone"
        ],
        "tips": ["Rotate toys weekly to keep novelty high."],
        "activities": ["Scent games in the garden", "Group walks"],
        "activity_why": ["Nose work drains energy faster than running."],
        "rewards": ["Tiny soft treats"],
        "reward_why": ["Keeps sessions fast without filling him up."],
        "mistakes": ["Repeating cues he already ignored"],
        "mistake_why": ["Teaches him the first cue is optional."],
        "analysis": {
            "summary": "Biscuit is a confident, people-first companion.",
            "detailed_description": "He reads household moods closely and mirrors them.",
            "traits": ["Outgoing", "Quick study", "Food motivated"],
            "fun_facts": ["Sleeps with one ear up."]
        },
        "compatibility": [
            {"label": "Families with children", "value": "Excellent",
             "note": "Supervise toddlers around food."},
            {"label": "First-time owners", "value": "Good"}
        ],
        "closing_summary": "A wonderful companion for an active, social home."
    }"#;
    serde_json::from_str(json).expect("test report parses")
}

#[test]
fn test_full_report_contains_every_section() {
    let bytes = render(&full_report()).unwrap();
    let content = String::from_utf8_lossy(&bytes);

    for title in [
        "Personality Dimensions",
        "Personality Analysis",
        "Strengths & Watch Points",
        "Care & Training Advice",
        "Household Compatibility",
        "Final Thoughts",
    ] {
        // Once in the table of contents and once as a section header
        assert!(
            content.matches(&format!("{}) Tj", title)).count() >= 2,
            "section {:?} missing from contents or body",
            title
        );
    }
}

#[test]
fn test_section_gating_leaves_no_placeholders() {
    let mut report = full_report();
    report.analysis = None;
    report.compatibility = None;
    report.closing_summary = None;
    let content = String::from_utf8_lossy(&render(&report).unwrap()).to_string();

    assert!(!content.contains("Personality Analysis"));
    assert!(!content.contains("Household Compatibility"));
    assert!(!content.contains("Final Thoughts"));
    // Remaining sections renumber contiguously
    assert!(content.contains("(1.  Personality Dimensions) Tj"));
    assert!(content.contains("(2.  Strengths & Watch Points) Tj"));
    assert!(content.contains("(3.  Care & Training Advice) Tj"));
}

#[test]
fn test_repeat_renders_are_byte_identical() {
    let report = full_report();
    let first = render(&report).unwrap();
    let second = render(&report).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_accented_text_is_win_ansi_encoded() {
    let mut report = full_report();
    report.pet_name = "B\u{e9}b\u{e9}".to_string();
    report.closing_summary = Some("Un compagnon id\u{e9}al \u{2014} vraiment.".to_string());
    let content = String::from_utf8_lossy(&render(&report).unwrap()).to_string();

    assert!(content.contains("B\\351b\\351"));
    assert!(content.contains("id\\351al \\227 vraiment."));
}

#[test]
fn test_advice_rationales_align_with_items() {
    let bytes = render(&full_report()).unwrap();
    let content = String::from_utf8_lossy(&bytes);

    // First activity carries its rationale, the second has none
    assert!(content.contains("(Scent games in the garden) Tj"));
    assert!(content.contains("(Nose work drains energy faster than running.) Tj"));
    assert!(content.contains("(Group walks) Tj"));
}

#[test]
fn test_invalid_reports_rejected() {
    let mut report = full_report();
    report.profile_title = String::new();
    assert!(render(&report).is_err());

    let mut report = full_report();
    report.mistake_why.push("extra rationale".to_string());
    assert!(render(&report).is_err());
}

#[test]
fn test_single_dimension_report_renders() {
    let report = ReportData {
        pet_name: "Mochi".to_string(),
        profile_title: "The Quiet Watcher".to_string(),
        dimensions: BTreeMap::from([("SEN".to_string(), 95u8)]),
        ..Default::default()
    };
    let content = String::from_utf8_lossy(&render(&report).unwrap()).to_string();
    assert!(content.contains("(Sensitivity) Tj"));
    assert!(content.contains("(95%) Tj"));
}

#[test]
fn test_custom_brand_appears_in_chrome() {
    let options = RenderOptions {
        brand: "WhiskerWorks".to_string(),
        ..Default::default()
    };
    let bytes = render_with_options(&full_report(), &options).unwrap();
    let content = String::from_utf8_lossy(&bytes);
    assert!(content.contains("(WhiskerWorks) Tj"));
    assert!(!content.contains("(PawReport) Tj"));
}

#[test]
fn test_rendered_file_round_trips_through_disk() {
    let bytes = render(&full_report()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("biscuit.pdf");
    std::fs::write(&path, &bytes).unwrap();
    let read_back = std::fs::read(&path).unwrap();
    assert_eq!(read_back, bytes);
    assert!(read_back.starts_with(b"%PDF-1.4\n"));
}
