//! Restaurant service

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::repositories::RestaurantRepository,
    error::{AppError, AppResult},
    handlers::restaurants::request::RestaurantRequest,
    middleware::auth::AuthenticatedUser,
    models::{Restaurant, UserRole},
    policy,
    services::CityService,
};

const RESTAURANT_NOT_FOUND: &str = "The requested restaurant was not found.";
const DUPLICATE_RESTAURANT: &str =
    "A restaurant with the same name, street address and city already exists.";

/// Restaurant service for business logic
pub struct RestaurantService;

impl RestaurantService {
    /// List restaurants in a city. Managers see only their own.
    pub async fn list_restaurants(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
    ) -> AppResult<Vec<Restaurant>> {
        CityService::resolve_city(pool, city_id).await?;

        match actor.role {
            UserRole::RestaurantManager => {
                RestaurantRepository::list_by_city_for_manager(pool, city_id, &actor.id).await
            }
            UserRole::Admin | UserRole::RegisteredUser => {
                RestaurantRepository::list_by_city(pool, city_id).await
            }
        }
    }

    /// Get a restaurant in a city. A manager may only see their own.
    pub async fn get_restaurant(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> AppResult<Restaurant> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = Self::resolve_restaurant(pool, city_id, restaurant_id).await?;

        if actor.role == UserRole::RestaurantManager {
            policy::require_restaurant_owner(actor, &restaurant)?;
        }

        Ok(restaurant)
    }

    /// Create a restaurant in a city, owned by the acting manager
    pub async fn create_restaurant(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        payload: &RestaurantRequest,
    ) -> AppResult<Restaurant> {
        CityService::resolve_city(pool, city_id).await?;

        payload.validate()?;

        if RestaurantRepository::exists_duplicate(pool, city_id, &payload.name, &payload.street_address)
            .await?
        {
            return Err(AppError::UnprocessableEntity(DUPLICATE_RESTAURANT.to_string()));
        }

        RestaurantRepository::create(
            pool,
            &payload.name,
            &payload.description,
            &payload.street_address,
            &payload.website_url,
            city_id,
            &actor.id,
        )
        .await
    }

    /// Update a restaurant. Only the owning manager may update.
    ///
    /// The duplicate scan does not exclude the restaurant being updated, so
    /// re-submitting a record's current values fails.
    pub async fn update_restaurant(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
        payload: &RestaurantRequest,
    ) -> AppResult<Restaurant> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = Self::resolve_restaurant(pool, city_id, restaurant_id).await?;

        policy::require_restaurant_owner(actor, &restaurant)?;

        payload.validate()?;

        if RestaurantRepository::exists_duplicate(pool, city_id, &payload.name, &payload.street_address)
            .await?
        {
            return Err(AppError::UnprocessableEntity(DUPLICATE_RESTAURANT.to_string()));
        }

        RestaurantRepository::update(
            pool,
            restaurant_id,
            &payload.name,
            &payload.description,
            &payload.street_address,
            &payload.website_url,
        )
        .await
    }

    /// Delete a restaurant. The owning manager or an admin may delete.
    pub async fn delete_restaurant(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> AppResult<()> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = Self::resolve_restaurant(pool, city_id, restaurant_id).await?;

        policy::require_restaurant_owner(actor, &restaurant)?;

        RestaurantRepository::delete(pool, restaurant_id).await
    }

    /// Resolve a restaurant within a city as a path ancestor
    pub async fn resolve_restaurant(
        pool: &PgPool,
        city_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> AppResult<Restaurant> {
        RestaurantRepository::find_in_city(pool, city_id, restaurant_id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()))
    }
}
