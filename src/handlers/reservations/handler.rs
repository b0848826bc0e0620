//! Reservation handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::AppJson,
    middleware::auth::AuthenticatedUser,
    models::UserRole,
    policy,
    services::ReservationService,
    state::AppState,
};

use super::{
    request::{CreateReservationRequest, UpdateReservationRequest},
    response::ReservationResponse,
};

/// List reservations at a restaurant
pub async fn list_reservations(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    policy::require_role(
        &auth_user,
        &[UserRole::RegisteredUser, UserRole::RestaurantManager],
    )?;

    let reservations =
        ReservationService::list_reservations(state.db(), &auth_user, &city_id, &restaurant_id)
            .await?;

    Ok(Json(
        reservations.into_iter().map(ReservationResponse::from).collect(),
    ))
}

/// Get a specific reservation at a restaurant
pub async fn get_reservation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id, reservation_id)): Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<Json<ReservationResponse>> {
    policy::require_role(
        &auth_user,
        &[UserRole::RegisteredUser, UserRole::RestaurantManager],
    )?;

    let reservation = ReservationService::get_reservation(
        state.db(),
        &auth_user,
        &city_id,
        &restaurant_id,
        &reservation_id,
    )
    .await?;

    Ok(Json(ReservationResponse::from(reservation)))
}

/// Create a reservation (registered users only; status always starts Pending)
pub async fn create_reservation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id)): Path<(Uuid, Uuid)>,
    AppJson(payload): AppJson<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    policy::require_role(&auth_user, &[UserRole::RegisteredUser])?;

    let reservation = ReservationService::create_reservation(
        state.db(),
        &auth_user,
        &city_id,
        &restaurant_id,
        &payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ReservationResponse::from(reservation))))
}

/// Update a reservation (owning restaurant's manager only)
pub async fn update_reservation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id, reservation_id)): Path<(Uuid, Uuid, Uuid)>,
    AppJson(payload): AppJson<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    policy::require_role(&auth_user, &[UserRole::RestaurantManager])?;

    let reservation = ReservationService::update_reservation(
        state.db(),
        &auth_user,
        &city_id,
        &restaurant_id,
        &reservation_id,
        &payload,
    )
    .await?;

    Ok(Json(ReservationResponse::from(reservation)))
}

/// Delete a reservation (owning restaurant's manager only)
pub async fn delete_reservation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id, reservation_id)): Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    policy::require_role(&auth_user, &[UserRole::RestaurantManager])?;

    ReservationService::delete_reservation(
        state.db(),
        &auth_user,
        &city_id,
        &restaurant_id,
        &reservation_id,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's reservations across all restaurants
pub async fn list_own_reservations(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    policy::require_role(&auth_user, &[UserRole::RegisteredUser])?;

    let reservations = ReservationService::list_own_reservations(state.db(), &auth_user).await?;

    Ok(Json(
        reservations.into_iter().map(ReservationResponse::from).collect(),
    ))
}

/// Get one of the caller's reservations
pub async fn get_own_reservation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(reservation_id): Path<Uuid>,
) -> AppResult<Json<ReservationResponse>> {
    policy::require_role(&auth_user, &[UserRole::RegisteredUser])?;

    let reservation =
        ReservationService::get_own_reservation(state.db(), &auth_user, &reservation_id).await?;

    Ok(Json(ReservationResponse::from(reservation)))
}
