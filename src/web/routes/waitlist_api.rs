use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;

use crate::services::waitlist_service::{self, RawSubmission, SubmissionError};

pub async fn create_waitlist_entry(
    State(pool): State<SqlitePool>,
    body: Result<Json<RawSubmission>, JsonRejection>,
) -> impl IntoResponse {
    // An unparseable body gets the same 400 shape as field-level failures.
    let Json(raw) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Invalid data provided",
                    "errors": [{ "field": "body", "message": rejection.body_text() }],
                })),
            )
                .into_response();
        }
    };

    match waitlist_service::submit(&pool, raw).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Successfully added to waitlist",
                "entry": entry,
            })),
        )
            .into_response(),
        Err(SubmissionError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Invalid data provided",
                "errors": errors,
            })),
        )
            .into_response(),
        Err(SubmissionError::DuplicateEmail) => (
            StatusCode::CONFLICT,
            Json(json!({
                "message": "This email is already on our waitlist.",
            })),
        )
            .into_response(),
        Err(SubmissionError::Storage(e)) => {
            error!("Waitlist submission failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "An error occurred while processing your request",
                })),
            )
                .into_response()
        }
    }
}

pub async fn list_waitlist_entries(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match waitlist_service::list(&pool).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            error!("Waitlist listing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "An error occurred while retrieving waitlist entries",
                })),
            )
                .into_response()
        }
    }
}
