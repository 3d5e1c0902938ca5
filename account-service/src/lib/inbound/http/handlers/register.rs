use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::FieldViolation;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegistrationCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 128;
const NAME_MAX_LENGTH: usize = 255;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let command = body.validate()?;

    let user = state.user_service.register_user(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            new_obj: UserData::from(&user),
        }),
    ))
}

/// Raw registration body. All fields optional at the serde level so that
/// every violation can be collected and reported in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
    is_active: Option<bool>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl RegisterRequest {
    /// Normalize into a registration command, or report the full list of
    /// field-level violations. Nothing is persisted on failure.
    fn validate(self) -> Result<RegistrationCommand, ApiError> {
        let mut violations = Vec::new();

        let username = match self.username {
            Some(raw) => Username::new(raw)
                .map_err(|e| violations.push(FieldViolation::new("username", e)))
                .ok(),
            None => {
                violations.push(FieldViolation::new("username", "Field is required"));
                None
            }
        };

        let email = match self.email {
            Some(raw) => EmailAddress::new(raw)
                .map_err(|e| violations.push(FieldViolation::new("email", e)))
                .ok()
                .map(Some),
            None => Some(None),
        };

        let password = match self.password {
            Some(raw) => {
                let length = raw.chars().count();
                if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
                    violations.push(FieldViolation::new(
                        "password",
                        format!(
                            "Password must be between {} and {} characters",
                            PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
                        ),
                    ));
                    None
                } else {
                    Some(raw)
                }
            }
            None => {
                violations.push(FieldViolation::new("password", "Field is required"));
                None
            }
        };

        let role = match self.role {
            Some(raw) => raw
                .parse::<Role>()
                .map_err(|e| violations.push(FieldViolation::new("role", e)))
                .ok(),
            None => Some(Role::default()),
        };

        let first_name = validate_name("first_name", self.first_name, &mut violations);
        let last_name = validate_name("last_name", self.last_name, &mut violations);

        match (username, email, password, role, first_name, last_name) {
            (Some(username), Some(email), Some(password), Some(role), Some(first), Some(last))
                if violations.is_empty() =>
            {
                Ok(RegistrationCommand {
                    username,
                    email,
                    password,
                    role,
                    is_active: self.is_active.unwrap_or(true),
                    first_name: first,
                    last_name: last,
                })
            }
            _ => Err(ApiError::Validation(violations)),
        }
    }
}

fn validate_name(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(name) => {
            let length = name.chars().count();
            if length == 0 || length > NAME_MAX_LENGTH {
                violations.push(FieldViolation::new(
                    field,
                    format!("Must be between 1 and {} characters", NAME_MAX_LENGTH),
                ));
                None
            } else {
                Some(name)
            }
        }
        None => {
            violations.push(FieldViolation::new(field, "Field is required"));
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "newObj")]
    pub new_obj: UserData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> RegisterRequest {
        RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("alice@example.com".to_string()),
            password: Some("secretpw1".to_string()),
            role: None,
            is_active: None,
            first_name: Some("A".to_string()),
            last_name: Some("L".to_string()),
        }
    }

    #[test]
    fn test_validate_success_with_defaults() {
        let command = full_request().validate().expect("validation failed");

        assert_eq!(command.username.as_str(), "alice");
        assert_eq!(command.role, Role::User);
        assert!(command.is_active);
        assert_eq!(command.password, "secretpw1");
    }

    #[test]
    fn test_validate_optional_email_absent() {
        let request = RegisterRequest {
            email: None,
            ..full_request()
        };

        let command = request.validate().expect("validation failed");
        assert!(command.email.is_none());
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let request = RegisterRequest {
            username: None,
            email: Some("not-an-email".to_string()),
            password: Some("short".to_string()),
            role: Some("root".to_string()),
            is_active: None,
            first_name: Some(String::new()),
            last_name: None,
        };

        let err = request.validate().unwrap_err();
        let ApiError::Validation(violations) = err else {
            panic!("expected validation error");
        };

        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                "username",
                "email",
                "password",
                "role",
                "first_name",
                "last_name"
            ]
        );
    }

    #[test]
    fn test_validate_password_bounds() {
        let ok_min = RegisterRequest {
            password: Some("a".repeat(8)),
            ..full_request()
        };
        assert!(ok_min.validate().is_ok());

        let ok_max = RegisterRequest {
            password: Some("a".repeat(128)),
            ..full_request()
        };
        assert!(ok_max.validate().is_ok());

        let too_long = RegisterRequest {
            password: Some("a".repeat(129)),
            ..full_request()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_validate_explicit_role() {
        let request = RegisterRequest {
            role: Some("admin".to_string()),
            ..full_request()
        };

        let command = request.validate().expect("validation failed");
        assert_eq!(command.role, Role::Admin);
    }
}
