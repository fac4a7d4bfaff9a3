use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use timetable_api::{
    config::{parse_cors_origins, parse_log_level},
    cors_layer,
    middleware::error_handling::map_error,
};
use timetable_core::errors::TimetableError;
use tracing::Level;

use crate::test_utils::TestContext;

#[rstest]
#[case(TimetableError::NotFound("Class not found".to_string()), StatusCode::NOT_FOUND)]
#[case(TimetableError::Validation("Block is required.".to_string()), StatusCode::BAD_REQUEST)]
#[case(TimetableError::Authentication("Sign in required".to_string()), StatusCode::UNAUTHORIZED)]
#[case(TimetableError::Database(eyre::eyre!("pool timed out")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_codes(#[case] error: TimetableError, #[case] expected: StatusCode) {
    assert_eq!(map_error(error).status(), expected);
}

#[rstest]
#[case("debug", Level::DEBUG)]
#[case(" WARN ", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
#[case("", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[test]
fn test_parse_cors_origins_drops_blanks() {
    assert_eq!(
        parse_cors_origins("http://localhost:5173, ,https://timetable.example.com,"),
        vec![
            "http://localhost:5173".to_string(),
            "https://timetable.example.com".to_string(),
        ]
    );
    assert!(parse_cors_origins(" , ").is_empty());
}

#[test]
fn test_cors_layer_rejects_invalid_origin() {
    assert!(cors_layer(&["http://localhost:5173".to_string()]).is_ok());
    assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
}

#[tokio::test]
async fn test_blank_user_header_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.store.expect_get_settings().times(0);

    let response = ctx
        .server()
        .get("/api/settings")
        .add_header(
            axum::http::HeaderName::from_static("x-user-id"),
            axum::http::HeaderValue::from_static("   "),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_identity() {
    let response = TestContext::new().server().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");

    let response = TestContext::new().server().get("/version").await;
    let body: Value = response.json();
    assert_eq!(body["name"], "timetable-api");
}
