//! City request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_CITY_NAME_LENGTH, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

/// City create/update request
#[derive(Debug, Deserialize, Validate)]
pub struct CityRequest {
    #[validate(range(
        min = MIN_LATITUDE,
        max = MAX_LATITUDE,
        message = "'latitude' must be between -90 and 90."
    ))]
    pub latitude: f64,

    #[validate(range(
        min = MIN_LONGITUDE,
        max = MAX_LONGITUDE,
        message = "'longitude' must be between -180 and 180."
    ))]
    pub longitude: f64,

    #[validate(length(
        min = 1,
        max = MAX_CITY_NAME_LENGTH,
        message = "'name' must not be empty and at most 30 characters."
    ))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_coordinates_and_empty_name_all_reported() {
        let payload = CityRequest {
            latitude: 100.0,
            longitude: -200.0,
            name: String::new(),
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
        assert!(fields.contains_key("name"));
    }

    #[test]
    fn test_boundary_coordinates_are_valid() {
        let payload = CityRequest {
            latitude: -90.0,
            longitude: 180.0,
            name: "Vilnius".to_string(),
        };

        assert!(payload.validate().is_ok());
    }
}
