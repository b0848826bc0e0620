//! Reservation response DTOs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Reservation, ReservationStatus};

/// Reservation representation returned by every reservation read and write
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            date: reservation.date,
            time: reservation.time,
            party_size: reservation.party_size,
            status: reservation.status,
            created_at: reservation.created_at,
            restaurant_id: reservation.restaurant_id,
            user_id: reservation.user_id,
        }
    }
}
