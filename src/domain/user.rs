//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by storage, never reused
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Request body for creating or replacing a user.
///
/// Both fields are optional at the decode step so that an absent field
/// is reported by name instead of as a generic JSON error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserInput {
    /// User display name (unique)
    #[validate(
        required(message = "Name cannot be blank"),
        length(min = 1, max = 80, message = "Name must be between 1 and 80 characters")
    )]
    #[schema(example = "alice", max_length = 80)]
    pub name: Option<String>,
    /// User email address (unique)
    #[validate(
        required(message = "Email cannot be blank"),
        length(min = 1, max = 80, message = "Email must be between 1 and 80 characters")
    )]
    #[schema(example = "alice@x.com", max_length = 80)]
    pub email: Option<String>,
}

impl UserInput {
    /// Take the name and email out of a validated input.
    pub fn into_fields(self) -> AppResult<(String, String)> {
        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok((name, email)),
            (None, _) => Err(AppError::validation("Name cannot be blank")),
            (_, None) => Err(AppError::validation("Email cannot be blank")),
        }
    }
}

/// User response (wire representation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "alice")]
    pub name: String,
    /// User email address
    #[schema(example = "alice@x.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, email: Option<&str>) -> UserInput {
        UserInput {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn complete_input_passes_validation() {
        let payload = input(Some("alice"), Some("alice@x.com"));
        assert!(payload.validate().is_ok());
        assert_eq!(
            payload.into_fields().unwrap(),
            ("alice".to_string(), "alice@x.com".to_string())
        );
    }

    #[test]
    fn missing_fields_fail_validation() {
        let errors = input(None, Some("alice@x.com")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = input(Some("alice"), None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn empty_and_oversized_fields_fail_validation() {
        assert!(input(Some(""), Some("alice@x.com")).validate().is_err());
        assert!(input(Some("alice"), Some(&"e".repeat(81))).validate().is_err());
        assert!(input(Some(&"n".repeat(80)), Some("alice@x.com")).validate().is_ok());
    }

    #[test]
    fn into_fields_reports_missing_name_first() {
        let err = input(None, None).into_fields().unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be blank");
    }

    #[test]
    fn response_carries_exactly_the_user_fields() {
        let response = UserResponse::from(User::new(7, "bob", "bob@x.com"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "bob", "email": "bob@x.com" })
        );
    }
}
