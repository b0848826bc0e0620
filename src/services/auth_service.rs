//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::auth::request::RegisterRequest,
    models::{User, UserRole},
    services::TokenService,
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user. Administrator accounts cannot be self-registered.
    pub async fn register(pool: &PgPool, payload: &RegisterRequest) -> AppResult<User> {
        payload.validate()?;

        if payload.role == UserRole::Admin {
            return Err(AppError::Validation(vec![
                "'role' must be RegisteredUser or RestaurantManager.".to_string(),
            ]));
        }

        if UserRepository::find_by_username(pool, &payload.username)
            .await?
            .is_some()
        {
            return Err(AppError::UnprocessableEntity(
                "Username already taken.".to_string(),
            ));
        }

        let password_hash = Self::hash_password(&payload.password)?;

        let user = UserRepository::create(
            pool,
            &payload.username,
            &payload.email,
            &password_hash,
            &payload.first_name,
            &payload.last_name,
            payload.role,
        )
        .await?;

        Ok(user)
    }

    /// Login with username and password, returning an access/refresh pair
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        username: &str,
        password: &str,
    ) -> AppResult<(String, String)> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| {
                AppError::UnprocessableEntity("Invalid username or password.".to_string())
            })?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::UnprocessableEntity(
                "Invalid username or password.".to_string(),
            ));
        }

        // A ban, or a revocation threshold still in the future, blocks login
        let now = Utc::now();
        if user.is_banned || !user.accepts_token_issued_at(now) {
            return Err(AppError::Forbidden);
        }

        Self::issue_token_pair(tokens, &user)
    }

    /// Exchange a refresh token for a fresh access/refresh pair.
    ///
    /// The refresh token must carry a valid signature, audience, issuer and
    /// expiry, belong to an existing unbanned user, and postdate that user's
    /// token validity threshold.
    pub async fn refresh_tokens(
        pool: &PgPool,
        tokens: &TokenService,
        refresh_token: &str,
    ) -> AppResult<(String, String)> {
        let invalid = || AppError::UnprocessableEntity("Invalid refresh token.".to_string());

        let claims = tokens.validate_refresh_token(refresh_token).ok_or_else(invalid)?;

        let user = UserRepository::find_by_id(pool, &claims.sub)
            .await?
            .ok_or_else(invalid)?;

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or_else(invalid)?;
        if user.is_banned || !user.accepts_token_issued_at(issued_at) {
            return Err(invalid());
        }

        Self::issue_token_pair(tokens, &user)
    }

    /// Logout: advance the token validity threshold to now, revoking every
    /// previously issued token
    pub async fn logout(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        UserRepository::advance_token_threshold(pool, user_id, Utc::now()).await
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn issue_token_pair(tokens: &TokenService, user: &User) -> AppResult<(String, String)> {
        let access_token = tokens.issue_access_token(user.id, &user.username, user.role)?;
        let refresh_token = tokens.issue_refresh_token(user.id)?;
        Ok((access_token, refresh_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("Sup3r-secret").unwrap();
        assert!(AuthService::verify_password("Sup3r-secret", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = AuthService::hash_password("Sup3r-secret").unwrap();
        let b = AuthService::hash_password("Sup3r-secret").unwrap();
        assert_ne!(a, b);
    }
}
