use crate::{AppState, ControllerError, SESSION_USER_HEADER, SessionUser};

use jt_db::SqliteUserStore;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::SqlitePool;

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/jt-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        store: Arc::new(SqliteUserStore::new(pool)),
    }
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(SESSION_USER_HEADER, "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = SessionUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_rejects_request_without_header() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = SessionUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ControllerError::Session { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_header_that_is_not_a_uuid() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(SESSION_USER_HEADER, "june")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = SessionUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ControllerError::Session { .. })));
}
