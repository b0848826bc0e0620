//! Reservation service

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::repositories::ReservationRepository,
    error::{AppError, AppResult},
    handlers::reservations::request::{CreateReservationRequest, UpdateReservationRequest},
    middleware::auth::AuthenticatedUser,
    models::{Reservation, UserRole},
    policy,
    services::{CityService, RestaurantService},
};

const RESERVATION_NOT_FOUND: &str = "The requested reservation was not found.";

/// Reservation service for business logic
pub struct ReservationService;

impl ReservationService {
    /// List reservations at a restaurant.
    ///
    /// The owning manager sees every reservation; a registered user sees
    /// only their own; a manager who does not own the restaurant sees none.
    pub async fn list_reservations(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> AppResult<Vec<Reservation>> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = RestaurantService::resolve_restaurant(pool, city_id, restaurant_id).await?;

        match actor.role {
            UserRole::RestaurantManager => {
                if restaurant.manager_id == actor.id {
                    ReservationRepository::list_by_restaurant(pool, restaurant_id).await
                } else {
                    Ok(Vec::new())
                }
            }
            UserRole::RegisteredUser => {
                ReservationRepository::list_by_restaurant_for_user(pool, restaurant_id, &actor.id)
                    .await
            }
            UserRole::Admin => ReservationRepository::list_by_restaurant(pool, restaurant_id).await,
        }
    }

    /// Get a reservation at a restaurant, subject to view ownership
    pub async fn get_reservation(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
        reservation_id: &Uuid,
    ) -> AppResult<Reservation> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = RestaurantService::resolve_restaurant(pool, city_id, restaurant_id).await?;

        let reservation = ReservationRepository::find_in_restaurant(pool, restaurant_id, reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESERVATION_NOT_FOUND.to_string()))?;

        policy::require_reservation_view(actor, &restaurant, &reservation)?;

        Ok(reservation)
    }

    /// Create a reservation as the acting registered user.
    ///
    /// Status always starts Pending; nothing in the request body can
    /// override it.
    pub async fn create_reservation(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
        payload: &CreateReservationRequest,
    ) -> AppResult<Reservation> {
        CityService::resolve_city(pool, city_id).await?;
        RestaurantService::resolve_restaurant(pool, city_id, restaurant_id).await?;

        payload.validate()?;

        ReservationRepository::create(
            pool,
            payload.date,
            payload.time,
            payload.party_size,
            restaurant_id,
            &actor.id,
        )
        .await
    }

    /// Update a reservation, including status transitions. Only the owning
    /// restaurant's manager may update.
    pub async fn update_reservation(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
        reservation_id: &Uuid,
        payload: &UpdateReservationRequest,
    ) -> AppResult<Reservation> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = RestaurantService::resolve_restaurant(pool, city_id, restaurant_id).await?;

        if ReservationRepository::find_in_restaurant(pool, restaurant_id, reservation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(RESERVATION_NOT_FOUND.to_string()));
        }

        policy::require_restaurant_owner(actor, &restaurant)?;

        payload.validate()?;

        ReservationRepository::update(
            pool,
            reservation_id,
            payload.date,
            payload.time,
            payload.party_size,
            payload.status,
        )
        .await
    }

    /// Delete a reservation. Only the owning restaurant's manager may delete.
    pub async fn delete_reservation(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        city_id: &Uuid,
        restaurant_id: &Uuid,
        reservation_id: &Uuid,
    ) -> AppResult<()> {
        CityService::resolve_city(pool, city_id).await?;
        let restaurant = RestaurantService::resolve_restaurant(pool, city_id, restaurant_id).await?;

        if ReservationRepository::find_in_restaurant(pool, restaurant_id, reservation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(RESERVATION_NOT_FOUND.to_string()));
        }

        policy::require_restaurant_owner(actor, &restaurant)?;

        ReservationRepository::delete(pool, reservation_id).await
    }

    /// List the acting user's reservations across all restaurants
    pub async fn list_own_reservations(
        pool: &PgPool,
        actor: &AuthenticatedUser,
    ) -> AppResult<Vec<Reservation>> {
        ReservationRepository::list_by_user(pool, &actor.id).await
    }

    /// Get one of the acting user's reservations by ID
    pub async fn get_own_reservation(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        reservation_id: &Uuid,
    ) -> AppResult<Reservation> {
        let reservation = ReservationRepository::find_by_id(pool, reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound(RESERVATION_NOT_FOUND.to_string()))?;

        policy::require_reservation_owner(actor, &reservation)?;

        Ok(reservation)
    }
}
