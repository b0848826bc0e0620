//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    handlers::users::response::UserResponse,
    handlers::AppJson,
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RefreshAccessTokenRequest, RegisterRequest},
    response::TokenPairResponse,
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = AuthService::register(state.db(), &payload).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<TokenPairResponse>> {
    let (access_token, refresh_token) = AuthService::login(
        state.db(),
        state.tokens(),
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(TokenPairResponse {
        access_token,
        refresh_token,
    }))
}

/// Exchange a refresh token for a new access/refresh pair
pub async fn refresh_access_token(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshAccessTokenRequest>,
) -> AppResult<Json<TokenPairResponse>> {
    let (access_token, refresh_token) =
        AuthService::refresh_tokens(state.db(), state.tokens(), &payload.refresh_token).await?;

    Ok(Json(TokenPairResponse {
        access_token,
        refresh_token,
    }))
}

/// Logout: revoke every previously issued token for the caller
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<StatusCode> {
    AuthService::logout(state.db(), &auth_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
