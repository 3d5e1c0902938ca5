use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::UserData;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Authenticated lookup by path id.
///
/// The path id is not matched against the caller's token subject: any valid
/// bearer token can fetch any user.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
) -> Result<Json<GetUserResponse>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::debug!(caller = %caller.user_id, requested = %user_id, "User lookup");

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            Json(GetUserResponse {
                user: user.into(),
            })
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserResponse {
    pub user: UserData,
}
