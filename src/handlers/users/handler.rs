//! User handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::AppJson,
    middleware::auth::AuthenticatedUser,
    models::{User, UserRole},
    policy,
    services::UserService,
    state::AppState,
};

use super::{
    request::UpdateUserRequest,
    response::{AdminUserResponse, UserResponse},
};

/// Admins see the extended representation; everyone else their own plain one
fn user_response_for(actor: &AuthenticatedUser, user: User) -> Response {
    match actor.role {
        UserRole::Admin => Json(AdminUserResponse::from(user)).into_response(),
        UserRole::RegisteredUser | UserRole::RestaurantManager => {
            Json(UserResponse::from(user)).into_response()
        }
    }
}

/// List all users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<AdminUserResponse>>> {
    policy::require_admin(&auth_user)?;

    let users = UserService::list_users(state.db()).await?;

    Ok(Json(users.into_iter().map(AdminUserResponse::from).collect()))
}

/// Get a user (self or admin)
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Response> {
    let user = UserService::get_user(state.db(), &auth_user, &user_id).await?;

    Ok(user_response_for(&auth_user, user))
}

/// Update a user's profile (self only)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> AppResult<Response> {
    let user = UserService::update_user(state.db(), &auth_user, &user_id, &payload).await?;

    Ok(user_response_for(&auth_user, user))
}

/// Delete a user (admin only). Owned restaurants and reservations cascade.
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    policy::require_admin(&auth_user)?;

    UserService::delete_user(state.db(), &user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Ban a user (admin only, not self)
pub async fn ban_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<AdminUserResponse>> {
    policy::require_admin(&auth_user)?;

    let user = UserService::set_banned(state.db(), &auth_user, &user_id, true).await?;

    Ok(Json(AdminUserResponse::from(user)))
}

/// Unban a user (admin only, not self)
pub async fn unban_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<AdminUserResponse>> {
    policy::require_admin(&auth_user)?;

    let user = UserService::set_banned(state.db(), &auth_user, &user_id, false).await?;

    Ok(Json(AdminUserResponse::from(user)))
}
