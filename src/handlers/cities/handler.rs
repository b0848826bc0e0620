//! City handler implementations

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
    policy,
    services::CityService,
    state::AppState,
};

use super::{request::CityRequest, response::CityResponse};

/// List all cities
pub async fn list_cities(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<CityResponse>>> {
    let cities = CityService::list_cities(state.db()).await?;

    Ok(Json(cities.into_iter().map(CityResponse::from).collect()))
}

/// Get a specific city
pub async fn get_city(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(city_id): Path<Uuid>,
) -> AppResult<Json<CityResponse>> {
    let city = CityService::get_city(state.db(), &auth_user, &city_id).await?;

    Ok(Json(CityResponse::from(city)))
}

/// Create a new city (admin only)
pub async fn create_city(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<CityRequest>,
) -> AppResult<(StatusCode, Json<CityResponse>)> {
    policy::require_admin(&auth_user)?;

    let city = CityService::create_city(state.db(), &payload).await?;

    Ok((StatusCode::CREATED, Json(CityResponse::from(city))))
}

/// Update a city (admin only)
pub async fn update_city(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(city_id): Path<Uuid>,
    AppJson(payload): AppJson<CityRequest>,
) -> AppResult<Json<CityResponse>> {
    policy::require_admin(&auth_user)?;

    let city = CityService::update_city(state.db(), &city_id, &payload).await?;

    Ok(Json(CityResponse::from(city)))
}

/// Delete a city (admin only)
pub async fn delete_city(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(city_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    policy::require_admin(&auth_user)?;

    CityService::delete_city(state.db(), &city_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
