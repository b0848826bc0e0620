//! City handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// City routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cities", get(handler::list_cities))
        .route("/cities", post(handler::create_city))
        .route("/cities/{city_id}", get(handler::get_city))
        .route("/cities/{city_id}", put(handler::update_city))
        .route("/cities/{city_id}", delete(handler::delete_city))
}
