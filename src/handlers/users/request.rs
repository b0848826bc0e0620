//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PERSON_NAME_LENGTH, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};

/// Profile update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(
        min = MIN_USERNAME_LENGTH,
        max = MAX_USERNAME_LENGTH,
        message = "'username' must be between 3 and 32 characters."
    ))]
    pub username: String,

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_update_passes() {
        let payload = UpdateUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Archer".to_string(),
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let payload = UpdateUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}
