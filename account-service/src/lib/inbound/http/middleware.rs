use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified token claims into handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// Middleware gating protected routes on a valid session token.
///
/// Verification is purely cryptographic (signature + expiry); the store is
/// never consulted here. Note that handlers behind this middleware receive
/// the caller's identity but are not required to match it against the
/// resource they serve.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized("Invalid token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user id");
        unauthorized("Invalid token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        first_name: claims.first_name,
        last_name: claims.last_name,
    });

    Ok(next.run(req).await)
}

/// The token is carried as the raw header value; a `Bearer ` scheme prefix
/// is tolerated and stripped when present.
fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Access denied"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    Ok(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": message })),
    )
        .into_response()
}
