use axum::{http::StatusCode, response::IntoResponse};
use exercise_tracker::error::AppError;
use http_body_util::BodyExt;

async fn error_body(error: AppError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let (status, body) = error_body(AppError::NotFound("User not found".to_string())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_validation_returns_400() {
    let (status, body) = error_body(AppError::Validation("Username is required".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username is required");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, _) = error_body(AppError::BadRequest("Invalid input".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_internal_hides_details() {
    let (status, body) = error_body(AppError::Internal("task panicked".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal error");
}

#[tokio::test]
async fn test_database_error_returns_500() {
    let (status, body) =
        error_body(AppError::Database(rusqlite::Error::QueryReturnedNoRows)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}
