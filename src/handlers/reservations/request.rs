//! Reservation request DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::ReservationStatus;
use crate::utils::validation::{date_in_past, time_in_past};

/// Reservation creation request. The status is not accepted here: new
/// reservations always start Pending.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_time"))]
pub struct CreateReservationRequest {
    #[validate(custom(function = "validate_date_not_past"))]
    pub date: NaiveDate,

    pub time: NaiveTime,

    #[validate(range(min = 1, message = "'partySize' must be greater than 0."))]
    pub party_size: i32,
}

/// Reservation update request, used by the owning restaurant's manager to
/// reschedule and to confirm or cancel
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_time"))]
pub struct UpdateReservationRequest {
    #[validate(custom(function = "validate_date_not_past"))]
    pub date: NaiveDate,

    pub time: NaiveTime,

    #[validate(range(min = 1, message = "'partySize' must be greater than 0."))]
    pub party_size: i32,

    pub status: ReservationStatus,
}

fn validate_date_not_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if date_in_past(*date) {
        let mut err = ValidationError::new("date");
        err.message = Some("'date' must be a valid date and not be in the past.".into());
        return Err(err);
    }
    Ok(())
}

fn time_not_past(date: NaiveDate, time: NaiveTime) -> Result<(), ValidationError> {
    if time_in_past(date, time) {
        let mut err = ValidationError::new("time");
        err.message = Some("'time' must be a valid time and not be in the past.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_create_time(payload: &CreateReservationRequest) -> Result<(), ValidationError> {
    time_not_past(payload.date, payload.time)
}

fn validate_update_time(payload: &UpdateReservationRequest) -> Result<(), ValidationError> {
    time_not_past(payload.date, payload.time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_future_reservation_is_valid() {
        let payload = CreateReservationRequest {
            date: Utc::now().date_naive() + Duration::days(3),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            party_size: 4,
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_past_date_and_zero_party_size_all_reported() {
        let payload = CreateReservationRequest {
            date: Utc::now().date_naive() - Duration::days(1),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            party_size: 0,
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("date"));
        assert!(fields.contains_key("party_size"));
    }

    #[test]
    fn test_update_with_past_date_is_rejected() {
        let payload = UpdateReservationRequest {
            date: Utc::now().date_naive() - Duration::days(7),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            party_size: 2,
            status: ReservationStatus::Confirmed,
        };

        assert!(payload.validate().is_err());
    }
}
