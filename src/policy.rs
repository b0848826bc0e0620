//! Authorization policy
//!
//! Role-set and ownership predicates evaluated per request. Every predicate
//! receives the authenticated caller explicitly and matches exhaustively on
//! the role enum, so adding a role forces every rule to be revisited.
//!
//! Role-set failures and ownership failures both map to 403; they are only
//! checked after path ancestors resolve, so a missing resource is always
//! reported as 404 regardless of who asks.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Reservation, Restaurant, UserRole},
};

/// Check that the caller's role is in the allowed set
pub fn require_role(user: &AuthenticatedUser, allowed: &[UserRole]) -> AppResult<()> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Check that the caller is an admin
pub fn require_admin(user: &AuthenticatedUser) -> AppResult<()> {
    require_role(user, &[UserRole::Admin])
}

/// Check that the caller is the target user or an admin
pub fn require_self_or_admin(user: &AuthenticatedUser, target_id: &Uuid) -> AppResult<()> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::RegisteredUser | UserRole::RestaurantManager => {
            if user.id == *target_id {
                Ok(())
            } else {
                Err(AppError::Forbidden)
            }
        }
    }
}

/// Check that the caller may act on a restaurant as its owner.
///
/// Admin bypasses ownership; a manager must own the restaurant; a
/// registered user never passes.
pub fn require_restaurant_owner(
    user: &AuthenticatedUser,
    restaurant: &Restaurant,
) -> AppResult<()> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::RestaurantManager => {
            if restaurant.manager_id == user.id {
                Ok(())
            } else {
                Err(AppError::Forbidden)
            }
        }
        UserRole::RegisteredUser => Err(AppError::Forbidden),
    }
}

/// Check that the caller may act on a reservation as the reserving user.
///
/// Admin bypasses ownership; a registered user must be the reserver; a
/// manager never passes (managers act through their restaurant instead).
pub fn require_reservation_owner(
    user: &AuthenticatedUser,
    reservation: &Reservation,
) -> AppResult<()> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::RegisteredUser => {
            if reservation.user_id == user.id {
                Ok(())
            } else {
                Err(AppError::Forbidden)
            }
        }
        UserRole::RestaurantManager => Err(AppError::Forbidden),
    }
}

/// Check that the caller may view a reservation under a restaurant:
/// the restaurant's manager sees all of its reservations, the reserving
/// user sees their own.
pub fn require_reservation_view(
    user: &AuthenticatedUser,
    restaurant: &Restaurant,
    reservation: &Reservation,
) -> AppResult<()> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::RestaurantManager => {
            if restaurant.manager_id == user.id {
                Ok(())
            } else {
                Err(AppError::Forbidden)
            }
        }
        UserRole::RegisteredUser => {
            if reservation.user_id == user.id {
                Ok(())
            } else {
                Err(AppError::Forbidden)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::ReservationStatus;

    fn caller(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "caller".to_string(),
            role,
        }
    }

    fn restaurant_managed_by(manager_id: Uuid) -> Restaurant {
        Restaurant {
            id: Uuid::new_v4(),
            name: "Trattoria".to_string(),
            description: "Neighborhood Italian".to_string(),
            street_address: "12 Via Roma".to_string(),
            website_url: "https://www.trattoria.example.com".to_string(),
            city_id: Uuid::new_v4(),
            manager_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn reservation_by(user_id: Uuid, restaurant_id: Uuid) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            date: Utc::now().date_naive(),
            time: chrono::NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            party_size: 2,
            status: ReservationStatus::Pending,
            restaurant_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_require_role() {
        let manager = caller(UserRole::RestaurantManager);
        assert!(require_role(&manager, &[UserRole::RestaurantManager]).is_ok());
        assert!(require_role(&manager, &[UserRole::Admin]).is_err());
        assert!(require_role(&manager, &[UserRole::RegisteredUser, UserRole::RestaurantManager]).is_ok());
    }

    #[test]
    fn test_manager_owns_their_restaurant() {
        let manager = caller(UserRole::RestaurantManager);
        let owned = restaurant_managed_by(manager.id);
        let other = restaurant_managed_by(Uuid::new_v4());

        assert!(require_restaurant_owner(&manager, &owned).is_ok());
        assert!(require_restaurant_owner(&manager, &other).is_err());
    }

    #[test]
    fn test_admin_bypasses_restaurant_ownership() {
        let admin = caller(UserRole::Admin);
        let restaurant = restaurant_managed_by(Uuid::new_v4());
        assert!(require_restaurant_owner(&admin, &restaurant).is_ok());
    }

    #[test]
    fn test_registered_user_never_owns_a_restaurant() {
        let user = caller(UserRole::RegisteredUser);
        let restaurant = restaurant_managed_by(user.id);
        assert!(require_restaurant_owner(&user, &restaurant).is_err());
    }

    #[test]
    fn test_reservation_ownership() {
        let user = caller(UserRole::RegisteredUser);
        let own = reservation_by(user.id, Uuid::new_v4());
        let other = reservation_by(Uuid::new_v4(), Uuid::new_v4());

        assert!(require_reservation_owner(&user, &own).is_ok());
        assert!(require_reservation_owner(&user, &other).is_err());
    }

    #[test]
    fn test_reservation_view_by_restaurant_manager() {
        let manager = caller(UserRole::RestaurantManager);
        let restaurant = restaurant_managed_by(manager.id);
        // Manager sees any reservation under their restaurant
        let reservation = reservation_by(Uuid::new_v4(), restaurant.id);
        assert!(require_reservation_view(&manager, &restaurant, &reservation).is_ok());

        let foreign = restaurant_managed_by(Uuid::new_v4());
        assert!(require_reservation_view(&manager, &foreign, &reservation).is_err());
    }

    #[test]
    fn test_self_or_admin() {
        let user = caller(UserRole::RegisteredUser);
        assert!(require_self_or_admin(&user, &user.id).is_ok());
        assert!(require_self_or_admin(&user, &Uuid::new_v4()).is_err());

        let admin = caller(UserRole::Admin);
        assert!(require_self_or_admin(&admin, &Uuid::new_v4()).is_ok());
    }
}
