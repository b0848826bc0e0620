//! City response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::City;

/// City representation returned by every city read and write
#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            latitude: city.latitude,
            longitude: city.longitude,
            name: city.name,
        }
    }
}
