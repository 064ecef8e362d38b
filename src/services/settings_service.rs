use crate::dto::settings_dto::WorkingHourEntry;
use crate::error::Result;
use crate::models::dealership::DealershipInfo;
use crate::models::working_hour::WorkingHour;
use sqlx::PgPool;
use uuid::Uuid;

const DEALERSHIP_COLUMNS: &str = "id, name, address, phone, email, created_at, updated_at";
const HOUR_COLUMNS: &str =
    "id, dealership_id, day_of_week, open_time, close_time, is_open, created_at, updated_at";

/// Schedule seeded when no dealership row exists yet.
const DEFAULT_HOURS: [(&str, &str, &str, bool); 7] = [
    ("MONDAY", "09:00", "18:00", true),
    ("TUESDAY", "09:00", "18:00", true),
    ("WEDNESDAY", "09:00", "18:00", true),
    ("THURSDAY", "09:00", "18:00", true),
    ("FRIDAY", "09:00", "18:00", true),
    ("SATURDAY", "10:00", "16:00", true),
    ("SUNDAY", "10:00", "16:00", false),
];

#[derive(Clone)]
pub struct SettingsService {
    pool: PgPool,
}

impl SettingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the singleton dealership with its hours in weekday order,
    /// creating both with defaults when nothing has been stored yet.
    pub async fn get_dealership(&self) -> Result<(DealershipInfo, Vec<WorkingHour>)> {
        let dealership = match self.find_dealership().await? {
            Some(dealership) => dealership,
            None => self.bootstrap_dealership().await?,
        };

        let hours = self.list_working_hours(dealership.id).await?;
        Ok((dealership, hours))
    }

    /// Replaces the full schedule in one transaction: everything stored for
    /// the dealership is deleted, then exactly the submitted entries are
    /// inserted.
    pub async fn replace_working_hours(
        &self,
        entries: &[WorkingHourEntry],
    ) -> Result<(DealershipInfo, Vec<WorkingHour>)> {
        let dealership = match self.find_dealership().await? {
            Some(dealership) => dealership,
            None => self.bootstrap_dealership().await?,
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM working_hours WHERE dealership_id = $1")
            .bind(dealership.id)
            .execute(&mut *tx)
            .await?;

        for entry in entries {
            sqlx::query(
                "INSERT INTO working_hours (dealership_id, day_of_week, open_time, close_time, is_open)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(dealership.id)
            .bind(entry.day_of_week.to_uppercase())
            .bind(&entry.open_time)
            .bind(&entry.close_time)
            .bind(entry.is_open)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let hours = self.list_working_hours(dealership.id).await?;
        Ok((dealership, hours))
    }

    async fn find_dealership(&self) -> Result<Option<DealershipInfo>> {
        let query = format!(
            "SELECT {} FROM dealership_info ORDER BY created_at ASC LIMIT 1",
            DEALERSHIP_COLUMNS
        );
        let dealership = sqlx::query_as::<_, DealershipInfo>(&query)
            .fetch_optional(&self.pool)
            .await?;

        Ok(dealership)
    }

    async fn bootstrap_dealership(&self) -> Result<DealershipInfo> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO dealership_info (name, address, phone, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            DEALERSHIP_COLUMNS
        );
        let dealership = sqlx::query_as::<_, DealershipInfo>(&query)
            .bind("Vehiql Motors")
            .bind("69 Car Street, Autoville, CA 69420")
            .bind("+1 (555) 123-4567")
            .bind("contact@vehiql.com")
            .fetch_one(&mut *tx)
            .await?;

        for (day, open_time, close_time, is_open) in DEFAULT_HOURS {
            sqlx::query(
                "INSERT INTO working_hours (dealership_id, day_of_week, open_time, close_time, is_open)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(dealership.id)
            .bind(day)
            .bind(open_time)
            .bind(close_time)
            .bind(is_open)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(dealership_id = %dealership.id, "Bootstrapped dealership with default hours");
        Ok(dealership)
    }

    async fn list_working_hours(&self, dealership_id: Uuid) -> Result<Vec<WorkingHour>> {
        let query = format!(
            "SELECT {} FROM working_hours
             WHERE dealership_id = $1
             ORDER BY CASE day_of_week
                 WHEN 'MONDAY' THEN 1
                 WHEN 'TUESDAY' THEN 2
                 WHEN 'WEDNESDAY' THEN 3
                 WHEN 'THURSDAY' THEN 4
                 WHEN 'FRIDAY' THEN 5
                 WHEN 'SATURDAY' THEN 6
                 WHEN 'SUNDAY' THEN 7
                 ELSE 8
             END",
            HOUR_COLUMNS
        );
        let hours = sqlx::query_as::<_, WorkingHour>(&query)
            .bind(dealership_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(hours)
    }
}
