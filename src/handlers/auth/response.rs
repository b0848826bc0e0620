//! Authentication response DTOs

use serde::Serialize;

/// Access/refresh token pair returned by login and token refresh
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}
