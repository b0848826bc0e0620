//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JWT_AUDIENCE,
    DEFAULT_JWT_ISSUER, DEFAULT_REFRESH_TOKEN_EXPIRY_HOURS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_expiry_minutes: i64,
    pub refresh_expiry_hours: i64,
}

/// Startup seeding configuration
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Password for the initial administrator account, if seeding is enabled
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            seed: SeedConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
            access_expiry_minutes: env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
                .unwrap_or_else(|_| DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACCESS_TOKEN_EXPIRY_MINUTES".to_string()))?,
            refresh_expiry_hours: env::var("REFRESH_TOKEN_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_REFRESH_TOKEN_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REFRESH_TOKEN_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl SeedConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            admin_password: env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_jwt_defaults() {
        let jwt = JwtConfig {
            secret: "test-secret".to_string(),
            issuer: DEFAULT_JWT_ISSUER.to_string(),
            audience: DEFAULT_JWT_AUDIENCE.to_string(),
            access_expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_expiry_hours: DEFAULT_REFRESH_TOKEN_EXPIRY_HOURS,
        };
        assert_eq!(jwt.access_expiry_minutes, 10);
        assert_eq!(jwt.refresh_expiry_hours, 24);
    }
}
