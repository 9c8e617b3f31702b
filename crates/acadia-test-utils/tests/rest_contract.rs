//! RestGateway against the mock backend: the uniform REST contract.

use acadia_gateway::{ClientConfig, Gateway, GatewayError, RestClient, RestGateway};
use acadia_model::{Course, CoursePayload, Department, Record, School};
use acadia_test_utils::{fixtures, init_tracing, MockApi};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn lists_and_gets_round_trip() {
    init_tracing();
    let api = MockApi::spawn();
    api.seed(&fixtures::course("C1", "Data Structures", "CS201", "P1"));
    api.seed(&fixtures::course("C2", "Operating Systems", "CS350", "P2"));

    let gateway: RestGateway<Course> = api.gateway();
    let all = gateway.list_all().await.unwrap();
    assert_eq!(all.len(), 2);

    let one = gateway.get_by_id("C2").await.unwrap();
    assert_eq!(one.course_code, "CS350");
}

#[tokio::test]
async fn parent_scoped_listing_filters_by_foreign_key() {
    let api = MockApi::spawn();
    api.seed(&fixtures::course("C1", "Data Structures", "CS201", "P1"));
    api.seed(&fixtures::course("C2", "Operating Systems", "CS350", "P2"));
    api.seed(&fixtures::course("C3", "Compilers", "CS401", "P1"));

    let gateway: RestGateway<Course> = api.gateway();
    let scoped = gateway.list_by_parent("P1").await.unwrap();
    let codes: Vec<&str> = scoped.iter().map(|c| c.course_code.as_str()).collect();
    assert_eq!(codes, ["CS201", "CS401"]);
}

#[tokio::test]
async fn parentless_entities_reject_scoped_listing() {
    let api = MockApi::spawn();
    let gateway: RestGateway<School> = api.gateway();
    let err = gateway.list_by_parent("X").await.unwrap_err();
    assert!(matches!(err, GatewayError::ParentScope { .. }));
}

#[tokio::test]
async fn create_assigns_an_id_and_timestamps() {
    let api = MockApi::spawn();
    let gateway: RestGateway<Course> = api.gateway();

    let payload = CoursePayload {
        course_name: Some("Compilers".into()),
        course_code: Some("CS401".into()),
        program_id: Some("P1".into()),
        ..Default::default()
    };
    let saved = gateway.create(&payload).await.unwrap();
    assert!(!saved.course_id.is_empty());
    assert!(saved.created_at.is_some());

    let listed = gateway.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), saved.id());
}

#[tokio::test]
async fn create_without_required_fields_is_a_validation_error() {
    let api = MockApi::spawn();
    let gateway: RestGateway<Course> = api.gateway();

    let payload = CoursePayload {
        course_name: Some("Nameless".into()),
        ..Default::default()
    };
    let err = gateway.create(&payload).await.unwrap_err();
    match err {
        GatewayError::Validation { message } => {
            assert!(message.contains("required"), "got: {message}");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn update_merges_and_bumps_updated_at() {
    let api = MockApi::spawn();
    api.seed(&fixtures::department("D1", "Computer Science", "S1"));

    let gateway: RestGateway<Department> = api.gateway();
    let payload = acadia_model::DepartmentPayload {
        office_location: Some("Block B".into()),
        ..Default::default()
    };
    let merged = gateway.update("D1", &payload).await.unwrap();
    assert_eq!(merged.department_name, "Computer Science");
    assert_eq!(merged.office_location.as_deref(), Some("Block B"));
    assert!(merged.updated_at.is_some());
}

#[tokio::test]
async fn missing_ids_map_to_not_found() {
    let api = MockApi::spawn();
    let gateway: RestGateway<Course> = api.gateway();

    assert!(gateway.get_by_id("nope").await.unwrap_err().is_not_found());
    assert!(gateway
        .update("nope", &CoursePayload::default())
        .await
        .unwrap_err()
        .is_not_found());
    assert!(gateway.delete("nope").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn delete_is_idempotent_from_the_caller_side() {
    let api = MockApi::spawn();
    api.seed(&fixtures::course("C1", "Data Structures", "CS201", "P1"));

    let gateway: RestGateway<Course> = api.gateway();
    gateway.delete("C1").await.unwrap();
    let second = gateway.delete("C1").await;
    assert!(second.unwrap_err().is_not_found());
    assert!(api.records("courses").is_empty());
}

#[tokio::test]
async fn unreachable_backend_surfaces_a_network_error() {
    // A port nothing listens on.
    let config = ClientConfig::new("http://127.0.0.1:9".parse().unwrap()).unwrap();
    let client = RestClient::new(&config).unwrap();
    let gateway: RestGateway<Course> = RestGateway::new(client);

    let err = gateway.list_all().await.unwrap_err();
    assert!(err.is_network(), "got: {err:?}");
}
