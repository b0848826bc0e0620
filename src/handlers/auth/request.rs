//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_PASSWORD_LENGTH, MAX_PERSON_NAME_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};
use crate::models::UserRole;

/// User registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(
        min = MIN_USERNAME_LENGTH,
        max = MAX_USERNAME_LENGTH,
        message = "'username' must be between 3 and 32 characters."
    ))]
    pub username: String,

    #[validate(length(
        min = MIN_PASSWORD_LENGTH,
        max = MAX_PASSWORD_LENGTH,
        message = "'password' must be between 8 and 128 characters."
    ))]
    pub password: String,

    #[validate(email(message = "'email' must be a valid email address."))]
    pub email: String,

    #[validate(length(
        min = 1,
        max = MAX_PERSON_NAME_LENGTH,
        message = "'firstName' must not be empty and at most 30 characters."
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = MAX_PERSON_NAME_LENGTH,
        message = "'lastName' must not be empty and at most 30 characters."
    ))]
    pub last_name: String,

    pub role: UserRole,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Access token refresh request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshAccessTokenRequest {
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_short_username_and_bad_email_together() {
        let payload = RegisterRequest {
            username: "ab".to_string(),
            password: "longenoughpassword".to_string(),
            email: "not-an-email".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Archer".to_string(),
            role: UserRole::RegisteredUser,
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_accepts_valid_payload() {
        let payload = RegisterRequest {
            username: "alice".to_string(),
            password: "longenoughpassword".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Archer".to_string(),
            role: UserRole::RestaurantManager,
        };

        assert!(payload.validate().is_ok());
    }
}
