//! Startup seeding
//!
//! Ensures an initial administrator account exists so a fresh deployment
//! can be managed without touching the database by hand.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::{
    config::SeedConfig,
    constants::{SEED_ADMIN_EMAIL, SEED_ADMIN_USERNAME},
    db::repositories::UserRepository,
    error::AppResult,
    models::UserRole,
    services::AuthService,
};

/// Create the initial admin account if no admin exists yet.
///
/// Skipped (with a warning) when no admin password is configured.
pub async fn ensure_admin(pool: &PgPool, config: &SeedConfig) -> AppResult<()> {
    if UserRepository::any_with_role(pool, UserRole::Admin).await? {
        return Ok(());
    }

    let Some(password) = config.admin_password.as_deref() else {
        warn!("No admin account exists and ADMIN_PASSWORD is not set; skipping admin seeding");
        return Ok(());
    };

    let password_hash = AuthService::hash_password(password)?;
    let admin = UserRepository::create(
        pool,
        SEED_ADMIN_USERNAME,
        SEED_ADMIN_EMAIL,
        &password_hash,
        "System",
        "Administrator",
        UserRole::Admin,
    )
    .await?;

    info!(username = %admin.username, "Seeded initial admin account");
    Ok(())
}
