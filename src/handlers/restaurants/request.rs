//! Restaurant request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_RESTAURANT_DESCRIPTION_LENGTH, MAX_RESTAURANT_NAME_LENGTH, MAX_STREET_ADDRESS_LENGTH,
};
use crate::utils::validation::validate_website_url;

/// Restaurant create/update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequest {
    #[validate(length(
        min = 1,
        max = MAX_RESTAURANT_NAME_LENGTH,
        message = "'name' must not be empty and at most 30 characters."
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = MAX_RESTAURANT_DESCRIPTION_LENGTH,
        message = "'description' must not be empty and at most 300 characters."
    ))]
    pub description: String,

    #[validate(length(
        min = 1,
        max = MAX_STREET_ADDRESS_LENGTH,
        message = "'streetAddress' must not be empty and at most 50 characters."
    ))]
    pub street_address: String,

    #[validate(custom(function = "validate_website_url"))]
    pub website_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> RestaurantRequest {
        RestaurantRequest {
            name: "Trattoria".to_string(),
            description: "Neighborhood Italian kitchen".to_string(),
            street_address: "12 Via Roma".to_string(),
            website_url: "https://www.trattoria.example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_bad_website_url_is_reported() {
        let mut payload = valid_payload();
        payload.website_url = "!!!".to_string();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("website_url"));
    }

    #[test]
    fn test_empty_fields_all_reported() {
        let payload = RestaurantRequest {
            name: String::new(),
            description: String::new(),
            street_address: String::new(),
            website_url: "example.com".to_string(),
        };

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }
}
