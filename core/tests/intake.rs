//! Complaint intake and lifecycle tests.

use vaani_core::{
    account::RoleKind,
    error::DeskError,
    intake::{Category, ComplaintDraft, ComplaintRecord, Priority, Status},
    session::DeskSession,
};

const T0: i64 = 1_750_000_000_000;

fn session(seed: u64) -> DeskSession {
    DeskSession::start_test(seed, T0).unwrap()
}

fn draft(title: &str, category: Category) -> ComplaintDraft {
    ComplaintDraft {
        title: title.into(),
        description: "Something needs fixing.".into(),
        category,
        location: "Ward 7".into(),
        priority: None,
        photo_ref: None,
    }
}

fn find(session: &DeskSession, id: &str) -> ComplaintRecord {
    session
        .complaints()
        .unwrap()
        .into_iter()
        .find(|c| c.complaint_id == id)
        .unwrap()
}

#[test]
fn submission_produces_pending_record() {
    let mut session = session(42);
    let record = session
        .submit_complaint(draft("Flickering street lamp", Category::Electricity))
        .unwrap();

    assert_eq!(record.status, Status::Pending);
    assert_eq!(record.resolved_at_ms, None);
    assert_eq!(
        record.priority,
        Priority::Medium,
        "unset priority defaults to medium"
    );
    assert_eq!(record.department, "Electricity Department");
    assert_eq!(record.assigned_category, Category::Electricity);
    assert_eq!(record.submitted_at_ms, T0);
    assert!(
        record.classifier_confidence >= 0.7 && record.classifier_confidence < 1.0,
        "confidence {} out of range",
        record.classifier_confidence
    );
    // Nobody is signed in, so the filer is recorded as anonymous.
    assert_eq!(record.submitter_id, "anonymous");
    assert_eq!(record.submitter_name, "Anonymous User");
}

#[test]
fn listing_is_newest_submission_first() {
    let mut session = session(42);
    session.submit_complaint(draft("A", Category::Road)).unwrap();
    session.submit_complaint(draft("B", Category::Road)).unwrap();
    session.submit_complaint(draft("C", Category::Road)).unwrap();

    let titles: Vec<String> = session
        .complaints()
        .unwrap()
        .iter()
        .map(|c| c.title.clone())
        .collect();
    // Three submissions on top of the three seeded records.
    assert_eq!(
        titles,
        vec![
            "C",
            "B",
            "A",
            "Street Light Not Working",
            "Water Leak on Main Road",
            "Pothole on Elm Street",
        ],
    );
}

#[test]
fn resolving_stamps_and_leaving_resolved_clears_the_timestamp() {
    let mut session = session(7);
    let record = session
        .submit_complaint(draft("Pothole", Category::Road))
        .unwrap();

    session.clock.advance(5_000);
    session
        .update_status(&record.complaint_id, Status::Resolved)
        .unwrap();
    let resolved = find(&session, &record.complaint_id);
    assert_eq!(resolved.status, Status::Resolved);
    assert_eq!(resolved.resolved_at_ms, Some(T0 + 5_000));

    // Transitions are unrestricted: resolved -> pending is allowed and
    // clears the timestamp.
    session
        .update_status(&record.complaint_id, Status::Pending)
        .unwrap();
    let reopened = find(&session, &record.complaint_id);
    assert_eq!(reopened.status, Status::Pending);
    assert_eq!(reopened.resolved_at_ms, None);
}

#[test]
fn unknown_id_update_is_a_noop() {
    let mut session = session(1);
    let before = session.complaints().unwrap();
    let events_before = session.event_count("status_changed").unwrap();

    session
        .update_status("cmp-does-not-exist", Status::Resolved)
        .unwrap();

    assert_eq!(session.complaints().unwrap(), before);
    assert_eq!(session.event_count("status_changed").unwrap(), events_before);
}

#[test]
fn empty_required_field_never_reaches_the_store() {
    let mut session = session(1);
    let before = session.complaints().unwrap().len();

    let mut bad = draft("  ", Category::Water);
    let err = session.submit_complaint(bad.clone()).unwrap_err();
    assert!(matches!(err, DeskError::EmptyField { field: "title" }));

    bad.title = "Leak".into();
    bad.description = String::new();
    let err = session.submit_complaint(bad).unwrap_err();
    assert!(matches!(err, DeskError::EmptyField { field: "description" }));

    assert_eq!(session.complaints().unwrap().len(), before);
}

#[test]
fn updates_never_reorder_the_listing() {
    let mut session = session(3);
    let a = session
        .submit_complaint(draft("A", Category::Waste))
        .unwrap();
    let b = session
        .submit_complaint(draft("B", Category::Waste))
        .unwrap();

    session
        .update_status(&a.complaint_id, Status::Resolved)
        .unwrap();

    let ids: Vec<String> = session
        .complaints()
        .unwrap()
        .iter()
        .take(2)
        .map(|c| c.complaint_id.clone())
        .collect();
    assert_eq!(ids, vec![b.complaint_id, a.complaint_id]);
}

#[test]
fn submitter_is_the_signed_in_account() {
    let mut session = session(9);
    let citizen = session.demo_login(RoleKind::Citizen).unwrap();
    let record = session
        .submit_complaint(draft("Dark alley", Category::Electricity))
        .unwrap();
    assert_eq!(record.submitter_id, citizen.account_id);
    assert_eq!(record.submitter_name, citizen.name);
}
