//! City service

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::repositories::{CityRepository, RestaurantRepository},
    error::{AppError, AppResult},
    handlers::cities::request::CityRequest,
    middleware::auth::AuthenticatedUser,
    models::{City, UserRole},
};

const CITY_NOT_FOUND: &str = "The requested city was not found.";
const DUPLICATE_CITY: &str = "A city with the same latitude, longitude and name already exists.";

/// City service for business logic
pub struct CityService;

impl CityService {
    /// List all cities
    pub async fn list_cities(pool: &PgPool) -> AppResult<Vec<City>> {
        CityRepository::list(pool).await
    }

    /// Get a city by ID.
    ///
    /// A restaurant manager may only look at cities in which they manage a
    /// restaurant; other roles see every city.
    pub async fn get_city(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
    ) -> AppResult<City> {
        let city = CityRepository::find_by_id(pool, city_id)
            .await?
            .ok_or_else(|| AppError::NotFound(CITY_NOT_FOUND.to_string()))?;

        match actor.role {
            UserRole::Admin | UserRole::RegisteredUser => {}
            UserRole::RestaurantManager => {
                let manages_here =
                    RestaurantRepository::manager_has_restaurant_in_city(pool, &actor.id, city_id)
                        .await?;
                if !manages_here {
                    return Err(AppError::Forbidden);
                }
            }
        }

        Ok(city)
    }

    /// Create a city
    pub async fn create_city(pool: &PgPool, payload: &CityRequest) -> AppResult<City> {
        payload.validate()?;

        if CityRepository::exists_duplicate(pool, payload.latitude, payload.longitude, &payload.name)
            .await?
        {
            return Err(AppError::UnprocessableEntity(DUPLICATE_CITY.to_string()));
        }

        CityRepository::create(pool, payload.latitude, payload.longitude, &payload.name).await
    }

    /// Update a city.
    ///
    /// The duplicate scan deliberately does not exclude the city being
    /// updated, so re-submitting a record's current values fails.
    pub async fn update_city(
        pool: &PgPool,
        city_id: &Uuid,
        payload: &CityRequest,
    ) -> AppResult<City> {
        if CityRepository::find_by_id(pool, city_id).await?.is_none() {
            return Err(AppError::NotFound(CITY_NOT_FOUND.to_string()));
        }

        payload.validate()?;

        if CityRepository::exists_duplicate(pool, payload.latitude, payload.longitude, &payload.name)
            .await?
        {
            return Err(AppError::UnprocessableEntity(DUPLICATE_CITY.to_string()));
        }

        CityRepository::update(pool, city_id, payload.latitude, payload.longitude, &payload.name)
            .await
    }

    /// Delete a city
    pub async fn delete_city(pool: &PgPool, city_id: &Uuid) -> AppResult<()> {
        if CityRepository::find_by_id(pool, city_id).await?.is_none() {
            return Err(AppError::NotFound(CITY_NOT_FOUND.to_string()));
        }

        CityRepository::delete(pool, city_id).await
    }

    /// Resolve a city as a path ancestor
    pub async fn resolve_city(pool: &PgPool, city_id: &Uuid) -> AppResult<City> {
        CityRepository::find_by_id(pool, city_id)
            .await?
            .ok_or_else(|| AppError::NotFound(CITY_NOT_FOUND.to_string()))
    }
}
