//! The assembled console against the mock backend.

use acadia_cache::QueryKey;
use acadia_console::{Console, ConsoleConfig, Screen};
use acadia_manager::FormPanel;
use acadia_model::{CoursePayload, EntityKind};
use acadia_test_utils::{fixtures, init_tracing, MockApi};
use pretty_assertions::assert_eq;

fn console_for(api: &MockApi) -> Console {
    let config = ConsoleConfig::new(api.base_url()).expect("loopback config");
    Console::new(config).expect("console builds")
}

fn seed_catalog(api: &MockApi) {
    api.seed(&fixtures::school("S1", "School of Engineering", "ENG"));
    api.seed(&fixtures::school("S2", "School of Science", "SCI"));
    api.seed(&fixtures::department("D1", "Computer Science", "S1"));
    api.seed(&fixtures::program("P1", "Software Engineering", "S1"));
    api.seed(&fixtures::program("P2", "Applied Physics", "S2"));
    api.seed(&fixtures::course("C1", "Data Structures", "CS201", "P1"));
    api.seed(&fixtures::course("C2", "Linear Algebra", "MA101", "P2"));
    let mut retired = fixtures::course("C3", "Punch Card Programming", "CS001", "P1");
    retired.status = Some("retired".into());
    api.seed(&retired);
    api.seed(&fixtures::lecturer("L1", "Ada", "Lovelace"));
    api.seed(&fixtures::student("U1", "Janet", "Mensah"));
    api.seed(&fixtures::admin("A1", "Root", "root@example.edu"));
    api.seed(&fixtures::assignment("AS1", "L1", "C1"));
}

#[tokio::test]
async fn dashboard_aggregates_every_collection() {
    init_tracing();
    let api = MockApi::spawn();
    seed_catalog(&api);
    let console = console_for(&api);

    let summary = console.dashboard().await;
    assert!(summary.load_failures.is_empty(), "{:?}", summary.load_failures);
    assert_eq!(summary.totals[&EntityKind::School], 2);
    assert_eq!(summary.totals[&EntityKind::Course], 3);
    assert_eq!(summary.totals[&EntityKind::Student], 1);
    assert_eq!(summary.active_courses, 2);
    assert_eq!(summary.departments_per_school.get("S1"), Some(&1));
    assert_eq!(summary.courses_per_program.get("P1"), Some(&2));
    assert_eq!(summary.assignments_per_lecturer.get("L1"), Some(&1));
}

#[tokio::test]
async fn create_flows_through_the_contract_and_refreshes_the_table() {
    let api = MockApi::spawn();
    seed_catalog(&api);
    let mut console = console_for(&api);
    console.navigate(Screen::Courses);

    let before = console.courses.visible_records().await;
    assert_eq!(before.rows.len(), 3);

    console.courses.open_create().unwrap();
    let payload = CoursePayload {
        course_name: Some("Compilers".into()),
        course_code: Some("CS401".into()),
        program_id: Some("P1".into()),
        ..Default::default()
    };
    let saved = console.courses.submit(payload).await.unwrap();
    assert!(!saved.course_id.is_empty());
    assert_eq!(console.courses.form_panel(), FormPanel::Closed);

    // The mutation invalidated the collection; wait out the
    // revalidation it triggers and re-read.
    let key = QueryKey::collection(EntityKind::Course);
    let mut version = console.cache().subscribe(&key);
    console.courses.visible_records().await;
    version.changed().await.unwrap();

    let after = console.courses.visible_records().await;
    assert_eq!(after.rows.len(), 4);
    assert!(after.rows.iter().any(|c| c.course_code == "CS401"));
}

#[tokio::test]
async fn rejected_submission_keeps_the_form_open() {
    let api = MockApi::spawn();
    let mut console = console_for(&api);

    console.courses.open_create().unwrap();
    let incomplete = CoursePayload {
        course_name: Some("Nameless".into()),
        ..Default::default()
    };
    let err = console.courses.submit(incomplete).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(console.courses.form_panel(), FormPanel::Create);
}

#[tokio::test]
async fn managers_share_one_cache() {
    let api = MockApi::spawn();
    seed_catalog(&api);
    let console = console_for(&api);

    // Prime the schools collection through its manager, then observe
    // the same key from the console-level cache handle.
    console.schools.all_records().await;
    let snapshot = console
        .cache()
        .peek::<Vec<acadia_model::School>>(&QueryKey::collection(EntityKind::School));
    assert_eq!(snapshot.data.map(|rows| rows.len()), Some(2));
}

#[tokio::test]
async fn navigation_tracks_the_active_screen() {
    let api = MockApi::spawn();
    let mut console = console_for(&api);

    assert_eq!(console.active_screen(), Screen::Dashboard);
    console.navigate(Screen::Students);
    assert_eq!(console.active_screen(), Screen::Students);
    assert_eq!(console.active_screen().kind(), Some(EntityKind::Student));
}
