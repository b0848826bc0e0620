//! Reservation repository

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Reservation, ReservationStatus},
};

/// Repository for reservation database operations
pub struct ReservationRepository;

impl ReservationRepository {
    /// Create a new reservation. Status always starts Pending.
    pub async fn create(
        pool: &PgPool,
        date: NaiveDate,
        time: NaiveTime,
        party_size: i32,
        restaurant_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Reservation> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (date, time, party_size, status, restaurant_id, user_id)
            VALUES ($1, $2, $3, 'pending', $4, $5)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(time)
        .bind(party_size)
        .bind(restaurant_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(reservation)
    }

    /// Find reservation by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Reservation>> {
        let reservation =
            sqlx::query_as::<_, Reservation>(r#"SELECT * FROM reservations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(reservation)
    }

    /// Find a reservation by ID within a specific restaurant
    pub async fn find_in_restaurant(
        pool: &PgPool,
        restaurant_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"SELECT * FROM reservations WHERE restaurant_id = $1 AND id = $2"#,
        )
        .bind(restaurant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(reservation)
    }

    /// List all reservations for a restaurant
    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: &Uuid,
    ) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"SELECT * FROM reservations WHERE restaurant_id = $1 ORDER BY date, time"#,
        )
        .bind(restaurant_id)
        .fetch_all(pool)
        .await?;

        Ok(reservations)
    }

    /// List a user's reservations at a specific restaurant
    pub async fn list_by_restaurant_for_user(
        pool: &PgPool,
        restaurant_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE restaurant_id = $1 AND user_id = $2
            ORDER BY date, time
            "#,
        )
        .bind(restaurant_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(reservations)
    }

    /// List all reservations made by a user, across restaurants
    pub async fn list_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"SELECT * FROM reservations WHERE user_id = $1 ORDER BY date, time"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(reservations)
    }

    /// Update a reservation, including its status
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        date: NaiveDate,
        time: NaiveTime,
        party_size: i32,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET date = $2, time = $3, party_size = $4, status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(time)
        .bind(party_size)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(reservation)
    }

    /// Delete a reservation
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM reservations WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
