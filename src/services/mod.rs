//! Business logic services

pub mod auth_service;
pub mod city_service;
pub mod reservation_service;
pub mod restaurant_service;
pub mod token_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use city_service::CityService;
pub use reservation_service::ReservationService;
pub use restaurant_service::RestaurantService;
pub use token_service::TokenService;
pub use user_service::UserService;
