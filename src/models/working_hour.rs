use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fixed ordering used both for validation and for sorting reads.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkingHour {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub day_of_week: String,
    pub open_time: String,
    pub close_time: String,
    pub is_open: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
