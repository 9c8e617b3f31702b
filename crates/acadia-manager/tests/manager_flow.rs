//! End-to-end manager flows over the scriptable in-memory gateway.

use acadia_cache::{CacheConfig, QueryCache, QueryKey, RecordCache};
use acadia_gateway::GatewayError;
use acadia_manager::{EntityManager, FormPanel, NoticeLevel};
use acadia_model::{CoursePayload, Department, EntityKind, FilterValue, Record};
use acadia_test_utils::{fixtures, FakeGateway};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn managers<E: acadia_model::Resource>(
    gateway: Arc<FakeGateway<E>>,
) -> (EntityManager<E>, QueryCache) {
    let cache = QueryCache::new(CacheConfig::default());
    let records = RecordCache::new(&CacheConfig::default());
    let manager = EntityManager::new(cache.clone(), records, gateway);
    (manager, cache)
}

fn course_gateway() -> Arc<FakeGateway<acadia_model::Course>> {
    Arc::new(
        FakeGateway::seeded(vec![
            fixtures::course("C1", "Data Structures", "CS201", "P1"),
            fixtures::course("C2", "Linear Algebra", "MA101", "P2"),
        ])
        .with_parent(|course| Some(course.program_id.clone())),
    )
}

#[tokio::test]
async fn search_matches_code_case_insensitively() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    manager.set_search("cs2");
    let view = manager.visible_records().await;
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].course_code, "CS201");
    assert!(!view.is_loading);
}

#[tokio::test]
async fn parent_filter_routes_to_scoped_listing() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    manager.change_parent_filter("program", Some(FilterValue::text("P2")));
    let view = manager.visible_records().await;
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].course_code, "MA101");
    assert_eq!(gateway.calls.list_by_parent(), 1);
    assert_eq!(gateway.calls.list_all(), 0);
}

#[tokio::test]
async fn changing_the_school_resets_dependent_filters() {
    let gateway: Arc<FakeGateway<Department>> = Arc::new(
        FakeGateway::seeded(vec![
            fixtures::department("D1", "Computer Science", "S1"),
            fixtures::department("D2", "Physics", "S2"),
        ])
        .with_parent(|department| Some(department.school_id.clone())),
    );
    let (mut manager, _cache) = managers(gateway);

    manager.change_parent_filter("school", Some(FilterValue::text("S1")));
    manager.set_filter("department", Some(FilterValue::text("D1")));
    assert!(manager.active_filters().contains_key("department"));

    manager.change_parent_filter("school", Some(FilterValue::text("S2")));
    assert!(
        !manager.active_filters().contains_key("department"),
        "department filter must reset when the school changes"
    );
    assert_eq!(
        manager.active_filters().get("school"),
        Some(&FilterValue::text("S2"))
    );
}

#[tokio::test]
async fn create_round_trip_strips_absent_fields_and_closes_the_panel() {
    let gateway = course_gateway();
    let (mut manager, cache) = managers(Arc::clone(&gateway));

    // Prime the collection so invalidation is observable.
    manager.visible_records().await;
    let mut courses_version = cache.subscribe(&QueryKey::collection(EntityKind::Course));

    manager.open_create().unwrap();
    gateway.queue_create_result(fixtures::course("C9", "Compilers", "CS401", "P1"));

    let payload = CoursePayload {
        course_name: Some("Compilers".into()),
        course_code: Some("CS401".into()),
        program_id: Some("P1".into()),
        ..Default::default()
    };
    let saved = manager.submit(payload).await.unwrap();

    assert_eq!(saved.course_id, "C9");
    assert_eq!(gateway.calls.create(), 1);
    assert_eq!(gateway.calls.update(), 0);
    assert_eq!(manager.form_panel(), FormPanel::Closed);
    assert!(manager.selected().is_none());

    let body = gateway.last_submitted_body().unwrap();
    let fields = body.as_object().unwrap();
    assert_eq!(fields.len(), 3, "absent fields must be stripped: {body}");
    assert!(fields.values().all(|v| !v.is_null()));

    assert!(
        courses_version.has_changed().unwrap(),
        "courses cache key must be invalidated on successful create"
    );

    let notices = manager.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn editing_submits_an_update_for_the_selected_record() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    let existing = fixtures::course("C1", "Data Structures", "CS201", "P1");
    manager.select_for_edit(existing.clone()).unwrap();
    assert_eq!(manager.form_panel(), FormPanel::Edit);

    let mut updated = existing;
    updated.course_name = "Data Structures II".into();
    gateway.queue_update_result(updated);

    let payload = CoursePayload {
        course_name: Some("Data Structures II".into()),
        ..Default::default()
    };
    let saved = manager.submit(payload).await.unwrap();

    assert_eq!(saved.course_name, "Data Structures II");
    assert_eq!(gateway.calls.update(), 1);
    assert_eq!(gateway.calls.create(), 0);
    assert!(manager.selected().is_none());
}

#[tokio::test]
async fn failed_submit_keeps_panel_open_and_selection_intact() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    let existing = fixtures::course("C1", "Data Structures", "CS201", "P1");
    manager.select_for_edit(existing).unwrap();
    gateway.fail_next(GatewayError::Validation {
        message: "course_code is required".into(),
    });

    let result = manager.submit(CoursePayload::default()).await;
    assert!(result.unwrap_err().is_validation());
    assert_eq!(manager.form_panel(), FormPanel::Edit);
    assert_eq!(manager.selected().map(Record::id), Some("C1"));

    let notices = manager.drain_notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("course_code"));
}

#[tokio::test]
async fn deleting_the_selected_record_clears_selection_and_panels() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    let viewed = fixtures::course("C1", "Data Structures", "CS201", "P1");
    manager.select_for_view(viewed);
    assert!(manager.is_detail_open());

    manager.request_delete("C1").await.unwrap();
    assert!(manager.selected().is_none());
    assert!(!manager.is_detail_open());
    assert_eq!(manager.form_panel(), FormPanel::Closed);

    // The record is gone from the backend and the record cache.
    let missing = manager.detail_record("C1").await;
    assert!(missing.unwrap_err().is_not_found());
}

#[tokio::test]
async fn second_delete_reports_not_found_without_other_changes() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    manager.request_delete("C2").await.unwrap();
    let second = manager.request_delete("C2").await;
    assert!(second.unwrap_err().is_not_found());

    let view = manager.visible_records().await;
    assert_eq!(view.rows.len(), 1, "first delete already took effect");
    assert_eq!(view.rows[0].course_id, "C1");
    assert_eq!(gateway.calls.delete(), 2);
}

#[tokio::test]
async fn delete_failures_leave_an_unrelated_selection_alone() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    let viewed = fixtures::course("C1", "Data Structures", "CS201", "P1");
    manager.select_for_view(viewed);
    gateway.fail_next(GatewayError::Network {
        message: "connection reset".into(),
    });

    assert!(manager.request_delete("C1").await.is_err());
    assert_eq!(manager.selected().map(Record::id), Some("C1"));
    assert!(manager.is_detail_open());
}

#[tokio::test]
async fn column_sort_orders_the_visible_rows() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    manager.set_sort(Some(acadia_manager::SortSpec::ascending("course_name")));
    let view = manager.visible_records().await;
    assert_eq!(view.rows[0].course_name, "Data Structures");
    assert_eq!(view.rows[1].course_name, "Linear Algebra");

    manager.set_sort(Some(acadia_manager::SortSpec::descending("course_name")));
    let view = manager.visible_records().await;
    assert_eq!(view.rows[0].course_name, "Linear Algebra");
}

#[tokio::test]
async fn cancel_closes_the_form_and_clears_the_selection() {
    let gateway = course_gateway();
    let (mut manager, _cache) = managers(Arc::clone(&gateway));

    let record = fixtures::course("C1", "Data Structures", "CS201", "P1");
    manager.select_for_edit(record.clone()).unwrap();
    manager.cancel_form().unwrap();
    assert_eq!(manager.form_panel(), FormPanel::Closed);
    assert!(manager.selected().is_none());
    assert_eq!(gateway.calls.update(), 0);

    // The detail panel keeps its selection on close so the shell can
    // offer "edit" from the closing view.
    manager.select_for_view(record);
    manager.close_detail();
    assert!(!manager.is_detail_open());
    assert_eq!(manager.selected().map(Record::id), Some("C1"));
}

#[tokio::test]
async fn detail_records_are_served_from_the_record_cache() {
    let gateway = course_gateway();
    let (manager, _cache) = managers(Arc::clone(&gateway));

    for _ in 0..3 {
        let record = manager.detail_record("C1").await.unwrap();
        assert_eq!(record.course_code, "CS201");
    }
    assert_eq!(gateway.calls.get_by_id(), 1);
}
