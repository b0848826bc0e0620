//! City model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// City database model
///
/// No two cities may share the same (latitude, longitude, name) triple.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
