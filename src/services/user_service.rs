//! User service

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::request::UpdateUserRequest,
    middleware::auth::AuthenticatedUser,
    models::User,
    policy,
};

const USER_NOT_FOUND: &str = "The requested user was not found.";

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List all users
    pub async fn list_users(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list(pool).await
    }

    /// Get a user. Admins may read anyone; others only themselves.
    pub async fn get_user(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        user_id: &Uuid,
    ) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        policy::require_self_or_admin(actor, user_id)?;

        Ok(user)
    }

    /// Update a user's profile. Strictly self-service: even admins may only
    /// update their own record.
    pub async fn update_user(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        user_id: &Uuid,
        payload: &UpdateUserRequest,
    ) -> AppResult<User> {
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        if actor.id != *user_id {
            return Err(AppError::Forbidden);
        }

        payload.validate()?;

        UserRepository::update_profile(
            pool,
            user_id,
            &payload.username,
            &payload.email,
            &payload.first_name,
            &payload.last_name,
        )
        .await
    }

    /// Delete a user. Owned restaurants and their reservations cascade.
    pub async fn delete_user(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        UserRepository::delete(pool, user_id).await
    }

    /// Ban or unban a user. Admins cannot ban or unban themselves.
    pub async fn set_banned(
        pool: &PgPool,
        actor: &AuthenticatedUser,
        user_id: &Uuid,
        banned: bool,
    ) -> AppResult<User> {
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        if actor.id == *user_id {
            let action = if banned { "ban" } else { "unban" };
            return Err(AppError::UnprocessableEntity(format!(
                "Cannot {} the currently authenticated user.",
                action
            )));
        }

        UserRepository::set_banned(pool, user_id, banned).await
    }
}
