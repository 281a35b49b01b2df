//! Form page and submission flow.

use actix_web::http::StatusCode;
use actix_web::test;
use defect_record_lib::config::defaults;
use sea_orm::{DbErr, RuntimeErr, Value};
use uuid::Uuid;

use super::test_helpers::*;

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

#[actix_rt::test]
async fn test_form_page_renders_defaults() {
    let app = create_test_app(unconfigured_pool()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(body.contains("<h1>Defect record</h1>"));
    assert!(body.contains(&format!("name=\"date\" value=\"{}\"", today)));
    assert!(body.contains("<option value=\"3\" selected>3</option>"));
    assert!(body.contains("<button type=\"submit\">Submit</button>"));
}

#[actix_rt::test]
async fn test_valid_submission_redirects_to_confirmation() {
    let id = Uuid::now_v7();
    let app = create_test_app(pool_returning(vec![stored_row(id, 2, "Test example")])).await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(VALID_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(format!("/defect/{}", id)));
}

#[actix_rt::test]
async fn test_back_to_back_submissions_insert_distinct_ids() {
    let (first, second) = (Uuid::now_v7(), Uuid::now_v7());
    let (pool, conn) = recording_pool(vec![
        stored_row(first, 2, "Test example"),
        stored_row(second, 2, "Test example"),
    ]);
    let app = create_test_app(pool).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/")
            .set_form(VALID_FORM)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let rows = inserted_rows(conn);
    assert_eq!(rows.len(), 2);
    let ids: Vec<&Value> = rows.iter().map(|row| &row["id"]).collect();
    assert!(matches!(ids[0], Value::Uuid(Some(_))), "id is a bound uuid: {:?}", ids[0]);
    assert_ne!(ids[0], ids[1]);
}

#[actix_rt::test]
async fn test_submission_stores_placeholder_real_results_and_parsed_severity() {
    let (pool, conn) = recording_pool(vec![stored_row(Uuid::now_v7(), 2, "Test example")]);
    let app = create_test_app(pool).await;

    let mut form = VALID_FORM.to_vec();
    form.push(("realResults", "crash-screenshot.png"));
    form.push(("expectedResults", "Dashboard opens"));

    let req = test::TestRequest::post().uri("/").set_form(&form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let rows = inserted_rows(conn);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["real_results"], Value::from("Test example"));
    assert_eq!(row["severity"], Value::from(2i32));
    assert_eq!(row["kind_of_test"], Value::from("unit"));
    assert_eq!(row["expected_results"], Value::from("Dashboard opens"));
    assert_eq!(row["test_case_number"], Value::from("TC_LOGIN_001"));
}

#[actix_rt::test]
async fn test_long_steps_to_reproduce_accepted() {
    let (pool, conn) = recording_pool(vec![stored_row(Uuid::now_v7(), 2, "Test example")]);
    let app = create_test_app(pool).await;

    let steps = "Click Save, then Back. ".repeat(870);
    assert!(steps.len() > 20_000);
    let mut form = VALID_FORM.to_vec();
    form.push(("stepsToReproduce", steps.as_str()));

    let req = test::TestRequest::post().uri("/").set_form(&form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let rows = inserted_rows(conn);
    assert_eq!(rows[0]["steps_to_reproduce"], Value::from(steps.trim()));
}

#[actix_rt::test]
async fn test_form_body_over_limit_rejected() {
    let app = create_test_app(unconfigured_pool()).await;

    let steps = "x".repeat(defaults::MAX_FORM_SIZE + 1);
    let mut form = VALID_FORM.to_vec();
    form.push(("stepsToReproduce", steps.as_str()));

    let req = test::TestRequest::post().uri("/").set_form(&form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_rt::test]
async fn test_insert_failure_keeps_form_silently() {
    let app = create_test_app(failing_pool(DbErr::Custom("insert rejected".to_string()))).await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(VALID_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(location(&resp), None);

    let body = body_text(resp).await;
    assert!(body.contains("value=\"TC_LOGIN_001\""), "entered values kept");
    assert!(!body.contains("class=\"error\""), "no visible error");
    assert!(body.contains("<button type=\"submit\">Submit</button>"), "controls enabled");
}

#[actix_rt::test]
async fn test_connection_failure_keeps_form_silently() {
    let app = create_test_app(failing_pool(DbErr::Conn(RuntimeErr::Internal(
        "connection refused".to_string(),
    ))))
    .await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(VALID_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(location(&resp), None);
}

#[actix_rt::test]
async fn test_unconfigured_database_keeps_form() {
    let app = create_test_app(unconfigured_pool()).await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(VALID_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(location(&resp), None);
}

#[actix_rt::test]
async fn test_invalid_submission_shows_field_errors() {
    let app = create_test_app(unconfigured_pool()).await;

    let mut form: Vec<(&str, &str)> = VALID_FORM
        .iter()
        .copied()
        .filter(|(name, _)| *name != "testerName")
        .collect();
    for entry in form.iter_mut() {
        if entry.0 == "severity" {
            entry.1 = "9";
        }
    }

    let req = test::TestRequest::post().uri("/").set_form(&form).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(resp).await;
    assert!(body.contains("id=\"testerName-error\""));
    assert!(body.contains("id=\"severity-error\""));
    assert!(!body.contains("id=\"time-error\""));
}

#[actix_rt::test]
async fn test_confirmation_shows_identifier() {
    let app = create_test_app(unconfigured_pool()).await;

    let req = test::TestRequest::get()
        .uri("/defect/0190f3a2-5b1c-7d2e-8f00-112233445566")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("0190f3a2-5b1c-7d2e-8f00-112233445566"));
    assert!(body.contains("Go Back"));
}
