//! Reservation model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reservation lifecycle states. New reservations always start Pending;
/// transitions are performed by the owning restaurant's manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Canceled,
}

/// Reservation database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Pending).unwrap(),
            "\"Pending\""
        );
        let status: ReservationStatus = serde_json::from_str("\"Canceled\"").unwrap();
        assert_eq!(status, ReservationStatus::Canceled);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<ReservationStatus>("\"Archived\"");
        assert!(result.is_err());
    }
}
