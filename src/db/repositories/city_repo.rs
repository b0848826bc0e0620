//! City repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::City};

/// Repository for city database operations
pub struct CityRepository;

impl CityRepository {
    /// Create a new city
    pub async fn create(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        name: &str,
    ) -> AppResult<City> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (latitude, longitude, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(city)
    }

    /// Find city by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<City>> {
        let city = sqlx::query_as::<_, City>(r#"SELECT * FROM cities WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(city)
    }

    /// List all cities
    pub async fn list(pool: &PgPool) -> AppResult<Vec<City>> {
        let cities = sqlx::query_as::<_, City>(r#"SELECT * FROM cities ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(cities)
    }

    /// Update a city
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        latitude: f64,
        longitude: f64,
        name: &str,
    ) -> AppResult<City> {
        let city = sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET latitude = $2, longitude = $3, name = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(latitude)
        .bind(longitude)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(city)
    }

    /// Delete a city
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM cities WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Check whether a city with the identical (latitude, longitude, name)
    /// triple already exists
    pub async fn exists_duplicate(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        name: &str,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM cities
                WHERE latitude = $1 AND longitude = $2 AND name = $3
            )
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
