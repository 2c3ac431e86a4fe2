//! Report export tests.

use vaani_core::{
    intake::{Category, ComplaintDraft, Priority, Status},
    report::{AI_INSIGHTS, AVG_RESOLUTION_TIME_DAYS},
    session::DeskSession,
};

const T0: i64 = 1_750_000_000_000;

#[test]
fn exported_report_matches_the_snapshot() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    let filed = session
        .submit_complaint(ComplaintDraft {
            title: "Overflowing bins".into(),
            description: "Missed collection.".into(),
            category: Category::Waste,
            location: "Ward 4".into(),
            priority: Some(Priority::High),
            photo_ref: None,
        })
        .unwrap();
    session
        .update_status(&filed.complaint_id, Status::Resolved)
        .unwrap();

    let stats = session.stats().unwrap();
    let json = session.export_report(30).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["period"], "Last 30 days");
    assert_eq!(value["summary"]["totalComplaints"], stats.total);
    assert_eq!(value["summary"]["resolvedComplaints"], stats.resolved);
    assert_eq!(value["summary"]["pendingComplaints"], stats.pending);
    assert_eq!(value["summary"]["resolutionRate"], stats.resolution_rate);
    assert_eq!(value["summary"]["avgResolutionTime"], AVG_RESOLUTION_TIME_DAYS);
    assert!(value["generatedAt"].is_string());

    // Canned strings, not computed analysis.
    let insights: Vec<&str> = value["aiInsights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(insights, AI_INSIGHTS.to_vec());

    // Seed baseline and live session figures appear side by side, unmerged.
    let dept = value["departmentPerformance"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["name"] == "Waste Management")
        .unwrap();
    assert_eq!(dept["complaints"], 12);
    assert_eq!(dept["resolved"], 10);
    assert_eq!(dept["pending"], 2);
    assert_eq!(dept["totalComplaints"], 1);
    assert_eq!(dept["resolutionRate"], 100);

    assert_eq!(value["categoryBreakdown"]["waste"], 1);
}

#[test]
fn export_is_recorded_in_the_event_log() {
    let mut session = DeskSession::start_test(7, T0).unwrap();
    assert_eq!(session.event_count("report_exported").unwrap(), 0);

    session.export_report(7).unwrap();
    session.export_report(90).unwrap();

    assert_eq!(session.event_count("report_exported").unwrap(), 2);
}

#[test]
fn report_on_an_untouched_session_reflects_the_seed_data() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    let json = session.export_report(30).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Three seeded complaints, one resolved.
    assert_eq!(value["summary"]["totalComplaints"], 3);
    assert_eq!(value["summary"]["resolvedComplaints"], 1);
    assert_eq!(value["summary"]["resolutionRate"], 33);
    assert_eq!(value["categoryBreakdown"]["electricity"], 1);
    assert_eq!(value["categoryBreakdown"]["water"], 1);
    assert_eq!(value["categoryBreakdown"]["road"], 1);
}
