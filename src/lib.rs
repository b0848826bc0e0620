//! Tablebook - Restaurant Table Reservation Service
//!
//! This library provides the backend for the Tablebook platform, where
//! registered users book restaurant tables, restaurant managers run their
//! restaurants and confirm or cancel bookings, and administrators manage
//! accounts.
//!
//! # Features
//!
//! - JWT authentication with short-lived access and rotating refresh tokens
//! - Instant token revocation via a per-user validity threshold
//! - Role- and ownership-based authorization over a closed role set
//! - City / restaurant / reservation management with uniqueness rules
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
