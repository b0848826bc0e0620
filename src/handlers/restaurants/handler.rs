//! Restaurant handler implementations

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
    services::RestaurantService,
    state::AppState,
};

use super::{request::RestaurantRequest, response::RestaurantResponse};

/// List restaurants in a city
pub async fn list_restaurants(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(city_id): Path<Uuid>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let restaurants =
        RestaurantService::list_restaurants(state.db(), &auth_user, &city_id).await?;

    Ok(Json(
        restaurants.into_iter().map(RestaurantResponse::from).collect(),
    ))
}

/// Get a specific restaurant
pub async fn get_restaurant(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<RestaurantResponse>> {
    let restaurant =
        RestaurantService::get_restaurant(state.db(), &auth_user, &city_id, &restaurant_id).await?;

    Ok(Json(RestaurantResponse::from(restaurant)))
}

/// Create a restaurant (restaurant managers only)
pub async fn create_restaurant(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(city_id): Path<Uuid>,
    AppJson(payload): AppJson<RestaurantRequest>,
) -> AppResult<(StatusCode, Json<RestaurantResponse>)> {
    policy::require_role(&auth_user, &[UserRole::RestaurantManager])?;

    let restaurant =
        RestaurantService::create_restaurant(state.db(), &auth_user, &city_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(RestaurantResponse::from(restaurant))))
}

/// Update a restaurant (owning manager only)
pub async fn update_restaurant(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id)): Path<(Uuid, Uuid)>,
    AppJson(payload): AppJson<RestaurantRequest>,
) -> AppResult<Json<RestaurantResponse>> {
    policy::require_role(&auth_user, &[UserRole::RestaurantManager])?;

    let restaurant = RestaurantService::update_restaurant(
        state.db(),
        &auth_user,
        &city_id,
        &restaurant_id,
        &payload,
    )
    .await?;

    Ok(Json(RestaurantResponse::from(restaurant)))
}

/// Delete a restaurant (owning manager or admin)
pub async fn delete_restaurant(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((city_id, restaurant_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    policy::require_role(&auth_user, &[UserRole::RestaurantManager, UserRole::Admin])?;

    RestaurantService::delete_restaurant(state.db(), &auth_user, &city_id, &restaurant_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
