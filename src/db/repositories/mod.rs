//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod city_repo;
pub mod reservation_repo;
pub mod restaurant_repo;
pub mod user_repo;

pub use city_repo::CityRepository;
pub use reservation_repo::ReservationRepository;
pub use restaurant_repo::RestaurantRepository;
pub use user_repo::UserRepository;
