use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::car::Car;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarAttributes {
    #[validate(length(min = 1))]
    pub make: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub mileage: i32,
    #[validate(length(min = 1))]
    pub color: String,
    #[validate(length(min = 1))]
    pub fuel_type: String,
    #[validate(length(min = 1))]
    pub transmission: String,
    #[validate(length(min = 1))]
    pub body_type: String,
    pub seats: Option<i32>,
    pub description: String,
    #[validate(custom(function = "crate::utils::validation::validate_car_status"))]
    pub status: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCarPayload {
    #[validate(nested)]
    pub car: CarAttributes,
    /// Images as `data:image/...;base64,...` URLs, in display order.
    #[validate(length(min = 1))]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCarStatusPayload {
    #[validate(custom(function = "crate::utils::validation::validate_car_status"))]
    pub status: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CarListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub mileage: i32,
    pub color: String,
    pub fuel_type: String,
    pub transmission: String,
    pub body_type: String,
    pub seats: Option<i32>,
    pub description: String,
    pub status: String,
    pub featured: bool,
    pub images: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarListResponse {
    pub items: Vec<CarResponse>,
}

impl From<Car> for CarResponse {
    fn from(value: Car) -> Self {
        Self {
            id: value.id,
            make: value.make,
            model: value.model,
            year: value.year,
            price: value.price,
            mileage: value.mileage,
            color: value.color,
            fuel_type: value.fuel_type,
            transmission: value.transmission,
            body_type: value.body_type,
            seats: value.seats,
            description: value.description,
            status: value.status,
            featured: value.featured,
            images: value.images,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
