//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/accessToken", post(handler::refresh_access_token))
}

/// Authentication routes requiring a valid access token
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/logout", post(handler::logout))
}
