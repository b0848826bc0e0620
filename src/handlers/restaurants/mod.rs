//! Restaurant handlers

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

/// Restaurant routes, nested under their owning city
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cities/{city_id}/restaurants",
            get(handler::list_restaurants),
        )
        .route(
            "/cities/{city_id}/restaurants",
            post(handler::create_restaurant),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}",
            get(handler::get_restaurant),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}",
            put(handler::update_restaurant),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}",
            delete(handler::delete_restaurant),
        )
}
