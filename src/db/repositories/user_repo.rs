//! User repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{User, UserRole},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// List all users
    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY created_at"#)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Update user profile fields
    pub async fn update_profile(
        pool: &PgPool,
        id: &Uuid,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, email = $3, first_name = $4, last_name = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Set the ban flag
    pub async fn set_banned(pool: &PgPool, id: &Uuid, banned: bool) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_banned = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(banned)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Advance the token validity threshold, revoking previously issued tokens.
    ///
    /// The threshold only ever moves forward; an already-later threshold is
    /// left untouched.
    pub async fn advance_token_threshold(
        pool: &PgPool,
        id: &Uuid,
        instant: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET token_validity_threshold = $2, updated_at = NOW()
            WHERE id = $1
              AND (token_validity_threshold IS NULL OR token_validity_threshold < $2)
            "#,
        )
        .bind(id)
        .bind(instant)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a user. Owned restaurants and reservations cascade at the
    /// store layer.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Check whether any user holds the given role
    pub async fn any_with_role(pool: &PgPool, role: UserRole) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE role = $1)"#)
                .bind(role)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }
}
