//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default access token expiry in minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 10;

/// Default refresh token expiry in hours
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Default JWT issuer
pub const DEFAULT_JWT_ISSUER: &str = "tablebook-api";

/// Default JWT audience
pub const DEFAULT_JWT_AUDIENCE: &str = "tablebook-client";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// SEEDING
// =============================================================================

/// Username of the seeded administrator account
pub const SEED_ADMIN_USERNAME: &str = "admin";

/// Email of the seeded administrator account
pub const SEED_ADMIN_EMAIL: &str = "admin@tablebook.local";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum city name length
pub const MAX_CITY_NAME_LENGTH: u64 = 30;

/// Maximum restaurant name length
pub const MAX_RESTAURANT_NAME_LENGTH: u64 = 30;

/// Maximum restaurant description length
pub const MAX_RESTAURANT_DESCRIPTION_LENGTH: u64 = 300;

/// Maximum street address length
pub const MAX_STREET_ADDRESS_LENGTH: u64 = 50;

/// Maximum first/last name length
pub const MAX_PERSON_NAME_LENGTH: u64 = 30;

/// Minimum latitude
pub const MIN_LATITUDE: f64 = -90.0;

/// Maximum latitude
pub const MAX_LATITUDE: f64 = 90.0;

/// Minimum longitude
pub const MIN_LONGITUDE: f64 = -180.0;

/// Maximum longitude
pub const MAX_LONGITUDE: f64 = 180.0;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
