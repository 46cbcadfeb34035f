//! Tests for developer API handlers.

use super::*;
use crate::inbound::http::test_utils::{seeded_state, signed_in_state, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::Value;

fn sam() -> DeveloperPayload {
    DeveloperPayload {
        name: "Sam".into(),
        email: "sam@example.com".into(),
        title: "Backend Engineer".into(),
        skills: vec![Skill::Python, Skill::Docker],
        years_experience: 4,
        is_professional: true,
        ..DeveloperPayload::default()
    }
}

fn ids(value: &Value) -> Vec<u64> {
    value["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["id"].as_u64())
        .collect()
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/v1/developers"))]
#[case(actix_test::TestRequest::get().uri("/api/v1/developers/1"))]
#[case(actix_test::TestRequest::post().uri("/api/v1/developers").set_json(sam()))]
#[case(actix_test::TestRequest::put().uri("/api/v1/developers/1").set_json(sam()))]
#[case(actix_test::TestRequest::delete().uri("/api/v1/developers/1"))]
#[actix_web::test]
async fn signed_out_requests_are_unauthorised(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"], "unauthorized");
}

#[rstest]
#[case("/api/v1/developers", vec![1, 2])]
#[case("/api/v1/developers?query=JANE", vec![2])]
#[case("/api/v1/developers?skill=Python", vec![1])]
#[case("/api/v1/developers?skill=All&query=engineer", vec![1])]
#[case("/api/v1/developers?skill=Node.js", vec![])]
#[actix_web::test]
async fn list_filters_and_reports_portfolio_counts(#[case] uri: &str, #[case] expected: Vec<u64>) {
    let app = actix_test::init_service(test_app(signed_in_state())).await;
    let value: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(uri).to_request(),
    )
    .await;

    assert_eq!(ids(&value), expected);
    assert_eq!(value["totalCount"], 2);
    assert_eq!(value["professionalCount"], 1);
}

#[actix_web::test]
async fn unknown_skill_is_rejected() {
    let app = actix_test::init_service(test_app(signed_in_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/developers?skill=Rust")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["details"]["field"], "skill");
}

#[actix_web::test]
async fn get_returns_record_or_not_found() {
    let app = actix_test::init_service(test_app(signed_in_state())).await;

    let jane: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/developers/2")
            .to_request(),
    )
    .await;
    assert_eq!(jane["name"], "Jane Doe");
    assert_eq!(jane["skills"], serde_json::json!(["React", "JavaScript", "TypeScript"]));

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/developers/99")
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_assigns_next_identifier() {
    let app = actix_test::init_service(test_app(signed_in_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/developers")
            .set_json(sam())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(response).await;
    assert_eq!(created["id"], 3);
    assert_eq!(created["yearsExperience"], 4);
}

#[rstest]
#[case(DeveloperPayload { name: " ".into(), ..sam() }, "name")]
#[case(DeveloperPayload { email: String::new(), ..sam() }, "email")]
#[actix_web::test]
async fn create_rejects_invalid_drafts(#[case] payload: DeveloperPayload, #[case] field: &str) {
    let state = signed_in_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/developers")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["details"]["field"], field);
    assert_eq!(state.developers.list().await.expect("list").len(), 2);
}

#[actix_web::test]
async fn update_keeps_path_identifier_and_position() {
    let state = signed_in_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let mut payload = sam();
    payload.name = "Jane Smith".into();

    let updated: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/developers/2")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(updated["id"], 2);

    let records = state.developers.list().await.expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].profile().name, "Jane Smith");
}

#[actix_web::test]
async fn delete_removes_record_and_is_idempotent() {
    let state = signed_in_state();
    let app = actix_test::init_service(test_app(state.clone())).await;

    for _ in 0..2 {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/developers/2")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let records = state.developers.list().await.expect("list");
    assert_eq!(records.len(), 1);
}
