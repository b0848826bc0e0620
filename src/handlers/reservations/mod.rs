//! Reservation handlers

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

/// Reservation routes: nested under city/restaurant for booking management,
/// plus a flat view of the caller's own reservations
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}/reservations",
            get(handler::list_reservations),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}/reservations",
            post(handler::create_reservation),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}/reservations/{reservation_id}",
            get(handler::get_reservation),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}/reservations/{reservation_id}",
            put(handler::update_reservation),
        )
        .route(
            "/cities/{city_id}/restaurants/{restaurant_id}/reservations/{reservation_id}",
            delete(handler::delete_reservation),
        )
        .route("/reservations", get(handler::list_own_reservations))
        .route(
            "/reservations/{reservation_id}",
            get(handler::get_own_reservation),
        )
}
