//! Restaurant repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Restaurant};

/// Repository for restaurant database operations
pub struct RestaurantRepository;

impl RestaurantRepository {
    /// Create a new restaurant under a city, owned by a manager
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
        street_address: &str,
        website_url: &str,
        city_id: &Uuid,
        manager_id: &Uuid,
    ) -> AppResult<Restaurant> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            r#"
            INSERT INTO restaurants (name, description, street_address, website_url, city_id, manager_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(street_address)
        .bind(website_url)
        .bind(city_id)
        .bind(manager_id)
        .fetch_one(pool)
        .await?;

        Ok(restaurant)
    }

    /// Find a restaurant by ID within a specific city
    pub async fn find_in_city(
        pool: &PgPool,
        city_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Restaurant>> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            r#"SELECT * FROM restaurants WHERE city_id = $1 AND id = $2"#,
        )
        .bind(city_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(restaurant)
    }

    /// List all restaurants in a city
    pub async fn list_by_city(pool: &PgPool, city_id: &Uuid) -> AppResult<Vec<Restaurant>> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            r#"SELECT * FROM restaurants WHERE city_id = $1 ORDER BY name"#,
        )
        .bind(city_id)
        .fetch_all(pool)
        .await?;

        Ok(restaurants)
    }

    /// List the restaurants a manager owns in a city
    pub async fn list_by_city_for_manager(
        pool: &PgPool,
        city_id: &Uuid,
        manager_id: &Uuid,
    ) -> AppResult<Vec<Restaurant>> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            r#"SELECT * FROM restaurants WHERE city_id = $1 AND manager_id = $2 ORDER BY name"#,
        )
        .bind(city_id)
        .bind(manager_id)
        .fetch_all(pool)
        .await?;

        Ok(restaurants)
    }

    /// Update a restaurant
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: &str,
        description: &str,
        street_address: &str,
        website_url: &str,
    ) -> AppResult<Restaurant> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            r#"
            UPDATE restaurants
            SET name = $2, description = $3, street_address = $4, website_url = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(street_address)
        .bind(website_url)
        .fetch_one(pool)
        .await?;

        Ok(restaurant)
    }

    /// Delete a restaurant. Its reservations cascade at the store layer.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM restaurants WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Check whether a restaurant with the identical (name, street_address)
    /// pair already exists in the city
    pub async fn exists_duplicate(
        pool: &PgPool,
        city_id: &Uuid,
        name: &str,
        street_address: &str,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM restaurants
                WHERE city_id = $1 AND name = $2 AND street_address = $3
            )
            "#,
        )
        .bind(city_id)
        .bind(name)
        .bind(street_address)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check whether a manager owns any restaurant in the given city
    pub async fn manager_has_restaurant_in_city(
        pool: &PgPool,
        manager_id: &Uuid,
        city_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM restaurants
                WHERE manager_id = $1 AND city_id = $2
            )
            "#,
        )
        .bind(manager_id)
        .bind(city_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
