use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::diagnostics::DiagnosticsError;
use crate::domain::diagnostics::TestEntry;
use crate::domain::diagnostics::TestEntryRepository;
use crate::inbound::http::router::AppState;

/// Throwaway diagnostic endpoint writing to the scratch `test` table.
pub async fn record_test(
    State(state): State<AppState>,
    Json(body): Json<RecordTestRequest>,
) -> Result<Json<RecordTestResponse>, ApiError> {
    let username = body
        .username
        .filter(|u| !u.is_empty() && u.chars().count() <= 255)
        .ok_or_else(|| {
            ApiError::BadRequest("username must be between 1 and 255 characters".to_string())
        })?;

    let jwt_token_version = match body.jwt_token_version {
        Some(v) if v < 1 => {
            return Err(ApiError::BadRequest(
                "jwt_token_version must be a positive integer".to_string(),
            ))
        }
        Some(v) => v,
        None => 1,
    };

    tracing::debug!(username = %username, jwt_token_version, "Test data received");

    state
        .test_entries
        .insert(TestEntry {
            username,
            jwt_token_version,
        })
        .await
        .map_err(|e| match e {
            DiagnosticsError::DuplicateUsername(_) => ApiError::Conflict(e.to_string()),
            DiagnosticsError::DatabaseError(_) => ApiError::InternalServerError(e.to_string()),
        })?;

    Ok(Json(RecordTestResponse {
        message: "Test data received successfully".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordTestRequest {
    username: Option<String>,
    jwt_token_version: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordTestResponse {
    pub message: String,
}
