use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims embedded in a signed session token.
///
/// Derived from a user record at login time and carried opaquely by the
/// client until expiry. Note that the user's token-version counter is not
/// part of the claims, so bumping it has no effect on already-issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject: the user's unique identifier.
    pub sub: String,

    pub first_name: String,
    pub last_name: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl SessionClaims {
    /// Build session claims for a user with an expiry relative to now.
    ///
    /// # Arguments
    /// * `user_id` - user's unique identifier
    /// * `first_name` / `last_name` - identity fields carried in the token
    /// * `expiration_hours` - hours until the token expires
    pub fn for_user(
        user_id: impl ToString,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
