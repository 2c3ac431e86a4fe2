//! Session lifecycle, accounts, and determinism tests.

use vaani_core::{
    account::{Role, RoleKind},
    intake::{Category, ComplaintDraft, Status},
    session::DeskSession,
};

const T0: i64 = 1_750_000_000_000;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
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

#[test]
fn seeded_session_exposes_demo_data() {
    init_logging();
    let session = DeskSession::start_test(42, T0).unwrap();

    let complaints = session.complaints().unwrap();
    assert_eq!(complaints.len(), 3);
    // Demo data reads newest-submission-first.
    assert_eq!(complaints[0].complaint_id, "1");
    assert_eq!(complaints[2].complaint_id, "3");

    let departments = session.departments().unwrap();
    assert_eq!(departments.len(), 4);
    assert_eq!(departments[0].name, "Electricity Department");

    assert_eq!(session.event_count("session_started").unwrap(), 1);
}

#[test]
fn demo_login_covers_all_three_roles() {
    let mut session = DeskSession::start_test(42, T0).unwrap();

    let citizen = session.demo_login(RoleKind::Citizen).unwrap();
    assert_eq!(citizen.role, Role::Citizen);

    let staff = session.demo_login(RoleKind::Department).unwrap();
    assert_eq!(
        staff.role,
        Role::Department {
            department: "Electricity Department".into()
        }
    );

    let admin = session.demo_login(RoleKind::Admin).unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(
        session.current_user().unwrap().account_id,
        admin.account_id
    );
}

#[test]
fn login_miss_is_none_not_an_error() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    assert!(session.login("nobody@nowhere.test").unwrap().is_none());
    assert!(session.current_user().is_none());

    let account = session.login("john.doe@email.com").unwrap().unwrap();
    assert_eq!(account.name, "John Doe");
}

#[test]
fn logout_clears_only_the_user() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    session.demo_login(RoleKind::Citizen).unwrap();
    session
        .submit_complaint(draft("New issue", Category::Road))
        .unwrap();

    session.logout().unwrap();
    assert!(session.current_user().is_none());
    // Filed complaints survive the logout.
    assert_eq!(session.complaints().unwrap().len(), 4);
}

#[test]
fn register_rejects_duplicate_emails() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    session
        .register("new.user@email.com", "New User", Role::Citizen)
        .unwrap();
    assert!(session
        .register("new.user@email.com", "Imposter", Role::Citizen)
        .is_err());
    // john.doe is seeded.
    assert!(session
        .register("john.doe@email.com", "Imposter", Role::Citizen)
        .is_err());
}

#[test]
fn my_complaints_filters_by_submitter() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    assert!(
        session.my_complaints().unwrap().is_empty(),
        "nobody signed in"
    );

    session.login("john.doe@email.com").unwrap();
    // Seeded complaint "1" belongs to the demo citizen.
    let mine: Vec<String> = session
        .my_complaints()
        .unwrap()
        .iter()
        .map(|c| c.complaint_id.clone())
        .collect();
    assert_eq!(mine, vec!["1"]);

    let filed = session
        .submit_complaint(draft("Second issue", Category::Water))
        .unwrap();
    let mine = session.my_complaints().unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].complaint_id, filed.complaint_id);
}

#[test]
fn department_view_sees_only_its_complaints() {
    let session = DeskSession::start_test(42, T0).unwrap();
    let electric = session
        .department_complaints("Electricity Department")
        .unwrap();
    assert_eq!(electric.len(), 1);
    assert_eq!(electric[0].complaint_id, "1");
}

#[test]
fn same_seed_reproduces_the_session() {
    const SEED: u64 = 0xCA5E;
    let mut a = DeskSession::start_test(SEED, T0).unwrap();
    let mut b = DeskSession::start_test(SEED, T0).unwrap();

    for i in 0..10 {
        let ca = a
            .submit_complaint(draft(&format!("r{i}"), Category::Road))
            .unwrap();
        let cb = b
            .submit_complaint(draft(&format!("r{i}"), Category::Road))
            .unwrap();
        assert_eq!(ca.classifier_confidence, cb.classifier_confidence);
        assert_eq!(ca.complaint_id, cb.complaint_id);
    }
}

#[test]
fn status_change_is_recorded_in_the_event_log() {
    let mut session = DeskSession::start_test(42, T0).unwrap();
    session.update_status("1", Status::InProgress).unwrap();

    let events = session.events().unwrap();
    let last = events.last().unwrap();
    assert_eq!(last.event_type, "status_changed");
    assert!(last.payload.contains("\"in-progress\""), "{}", last.payload);
}
