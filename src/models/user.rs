//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User account roles. Every user holds exactly one role, fixed at
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum UserRole {
    RegisteredUser,
    RestaurantManager,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UserRole::RegisteredUser => "RegisteredUser",
            UserRole::RestaurantManager => "RestaurantManager",
            UserRole::Admin => "Admin",
        };
        write!(f, "{}", name)
    }
}

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_banned: bool,
    /// Tokens issued at or before this instant are rejected
    pub token_validity_threshold: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether a token issued at the given instant is still honored.
    ///
    /// Rejects when the validity threshold is set and lies at or after the
    /// token's issued-at instant, which revokes every token issued up to the
    /// moment of a logout or ban without a blacklist.
    pub fn accepts_token_issued_at(&self, issued_at: DateTime<Utc>) -> bool {
        match self.token_validity_threshold {
            Some(threshold) => threshold < issued_at,
            None => true,
        }
    }

    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user_with_threshold(threshold: Option<DateTime<Utc>>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Alice".to_string(),
            last_name: "Archer".to_string(),
            role: UserRole::RegisteredUser,
            is_banned: false,
            token_validity_threshold: threshold,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_threshold_accepts_any_token() {
        let user = user_with_threshold(None);
        assert!(user.accepts_token_issued_at(Utc::now() - Duration::days(365)));
    }

    #[test]
    fn test_token_issued_at_threshold_is_rejected() {
        let instant = Utc::now();
        let user = user_with_threshold(Some(instant));
        assert!(!user.accepts_token_issued_at(instant));
    }

    #[test]
    fn test_token_issued_before_threshold_is_rejected() {
        let instant = Utc::now();
        let user = user_with_threshold(Some(instant));
        assert!(!user.accepts_token_issued_at(instant - Duration::minutes(5)));
    }

    #[test]
    fn test_token_issued_after_threshold_is_accepted() {
        let instant = Utc::now();
        let user = user_with_threshold(Some(instant));
        assert!(user.accepts_token_issued_at(instant + Duration::seconds(1)));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&UserRole::RestaurantManager).unwrap(),
            "\"RestaurantManager\""
        );
        let role: UserRole = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
