//! JSON API endpoints.

use actix_web::http::StatusCode;
use actix_web::test;
use defect_record_lib::error::ErrorResponse;
use defect_record_lib::models::Defect;
use sea_orm::DbErr;
use serde_json::{Value, json};
use uuid::Uuid;

use super::test_helpers::*;

fn payload() -> Value {
    json!({
        "date": "2024-01-01T00:00:00Z",
        "time": "10:00 AM",
        "testerName": "Alice",
        "testCaseNumber": "TC_LOGIN_001",
        "kindOfTest": "unit",
        "classification": "functionality",
        "severity": 2,
        "realResults": "Login button does nothing",
        "version": "1.0.0"
    })
}

#[actix_rt::test]
async fn test_create_returns_stored_defect() {
    let id = Uuid::now_v7();
    let app =
        create_test_app(pool_returning(vec![stored_row(id, 2, "Login button does nothing")])).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/defects")
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(location(&resp), Some(format!("/defect/{}", id)));

    let defect: Defect = test::read_body_json(resp).await;
    assert_eq!(defect.id, id);
    assert_eq!(defect.severity, 2);
    assert_eq!(defect.real_results, "Login button does nothing");
}

#[actix_rt::test]
async fn test_create_rejects_out_of_range_severity() {
    let app = create_test_app(unconfigured_pool()).await;

    let mut body = payload();
    body["severity"] = json!(7);
    let req = test::TestRequest::post()
        .uri("/api/v1/defects")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.error, "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_create_rejects_unknown_classification() {
    let app = create_test_app(unconfigured_pool()).await;

    let mut body = payload();
    body["classification"] = json!("cosmetic");
    let req = test::TestRequest::post()
        .uri("/api/v1/defects")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_create_reports_insert_failure() {
    let app = create_test_app(failing_pool(DbErr::Custom("insert rejected".to_string()))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/defects")
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.error, "DATABASE_ERROR");
}

#[actix_rt::test]
async fn test_create_without_database_url_is_unavailable() {
    let app = create_test_app(unconfigured_pool()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/defects")
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.error, "CONFIGURATION_ERROR");
}

#[actix_rt::test]
async fn test_health_and_ready() {
    let app = create_test_app(unconfigured_pool()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
