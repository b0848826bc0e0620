//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository, error::AppError, models::UserRole, state::AppState,
};

/// Authenticated caller identity, resolved from the access token and the
/// credential store. Passed explicitly into every handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware.
///
/// Verifies the bearer access token, then re-reads the user from the store
/// so that bans and the token validity threshold take effect immediately:
/// a token issued at or before the stored threshold is rejected even when
/// it has not yet expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            debug!(path = %path, "Auth failed: no Authorization header");
            AppError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        debug!(path = %path, "Auth failed: expected 'Bearer <token>'");
        AppError::Unauthorized
    })?;

    let claims = state.tokens().decode_access_token(token).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let user = UserRepository::find_by_id(state.db(), &claims.sub)
        .await?
        .ok_or_else(|| {
            debug!(path = %path, sub = %claims.sub, "Auth failed: unknown subject");
            AppError::InvalidToken
        })?;

    if user.is_banned {
        debug!(path = %path, user_id = %user.id, "Auth failed: account banned");
        return Err(AppError::Unauthorized);
    }

    let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(AppError::InvalidToken)?;
    if !user.accepts_token_issued_at(issued_at) {
        debug!(path = %path, user_id = %user.id, "Auth failed: token predates validity threshold");
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        username: user.username,
        role: user.role,
    });

    Ok(next.run(request).await)
}
