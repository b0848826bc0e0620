//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod cities;
pub mod health;
pub mod reservations;
pub mod restaurants;
pub mod users;

use axum::{extract::FromRequest, middleware, Router};

use crate::{error::AppError, middleware::auth::auth_middleware, state::AppState};

/// JSON extractor that reports malformed bodies through the application
/// error shape (400) instead of axum's plain-text rejection
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(auth::protected_routes())
        .merge(cities::routes())
        .merge(restaurants::routes())
        .merge(reservations::routes())
        .merge(users::routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected)
}
