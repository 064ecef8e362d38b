use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::dealership::DealershipInfo;
use crate::models::user::User;
use crate::models::working_hour::WorkingHour;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkingHourEntry {
    #[validate(custom(function = "crate::utils::validation::validate_day_of_week"))]
    pub day_of_week: String,
    #[validate(length(min = 1))]
    pub open_time: String,
    #[validate(length(min = 1))]
    pub close_time: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveWorkingHoursPayload {
    #[validate(length(min = 1, max = 7), nested)]
    pub working_hours: Vec<WorkingHourEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHourResponse {
    pub id: Uuid,
    pub day_of_week: String,
    pub open_time: String,
    pub close_time: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealershipResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: Vec<WorkingHourResponse>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRolePayload {
    #[validate(custom(function = "crate::utils::validation::validate_user_role"))]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub role: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<UserResponse>,
}

impl From<WorkingHour> for WorkingHourResponse {
    fn from(value: WorkingHour) -> Self {
        Self {
            id: value.id,
            day_of_week: value.day_of_week,
            open_time: value.open_time,
            close_time: value.close_time,
            is_open: value.is_open,
        }
    }
}

impl DealershipResponse {
    pub fn from_parts(dealership: DealershipInfo, hours: Vec<WorkingHour>) -> Self {
        Self {
            id: dealership.id,
            name: dealership.name,
            address: dealership.address,
            phone: dealership.phone,
            email: dealership.email,
            working_hours: hours.into_iter().map(Into::into).collect(),
            created_at: dealership.created_at,
            updated_at: dealership.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            external_id: value.external_id,
            name: value.name,
            email: value.email,
            image_url: value.image_url,
            role: value.role,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
