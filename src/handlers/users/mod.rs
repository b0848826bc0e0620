//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/users/{user_id}", get(handler::get_user))
        .route("/users/{user_id}", put(handler::update_user))
        .route("/users/{user_id}", delete(handler::delete_user))
        .route("/users/{user_id}/ban", put(handler::ban_user))
        .route("/users/{user_id}/unban", put(handler::unban_user))
}
