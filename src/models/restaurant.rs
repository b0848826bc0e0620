//! Restaurant model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Restaurant database model
///
/// Belongs to a city and is owned by the managing user. No two restaurants
/// in the same city may share the same (name, street_address) pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub street_address: String,
    pub website_url: String,
    pub city_id: Uuid,
    pub manager_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
