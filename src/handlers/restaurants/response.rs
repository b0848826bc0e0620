//! Restaurant response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::Restaurant;

/// Restaurant representation returned by every restaurant read and write
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub street_address: String,
    pub website_url: String,
    pub city_id: Uuid,
    pub manager_id: Uuid,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            street_address: restaurant.street_address,
            website_url: restaurant.website_url,
            city_id: restaurant.city_id,
            manager_id: restaurant.manager_id,
        }
    }
}
