use crate::dto::car_dto::CarAttributes;
use crate::error::Result;
use crate::models::car::Car;
use sqlx::PgPool;
use uuid::Uuid;

const CAR_COLUMNS: &str = "id, make, model, year, price, mileage, color, fuel_type, transmission, body_type, seats, description, status, featured, images, created_at, updated_at";

#[derive(Clone)]
pub struct CarService {
    pool: PgPool,
}

impl CarService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a listing under a caller-supplied id so the row shares its
    /// identifier with the storage folder the images were uploaded to.
    pub async fn create(
        &self,
        id: Uuid,
        attrs: &CarAttributes,
        status: &str,
        images: &[String],
    ) -> Result<Car> {
        let query = format!(
            "INSERT INTO cars (id, make, model, year, price, mileage, color, fuel_type, transmission, body_type, seats, description, status, featured, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {}",
            CAR_COLUMNS
        );

        let car = sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&attrs.make)
            .bind(&attrs.model)
            .bind(attrs.year)
            .bind(attrs.price)
            .bind(attrs.mileage)
            .bind(&attrs.color)
            .bind(&attrs.fuel_type)
            .bind(&attrs.transmission)
            .bind(&attrs.body_type)
            .bind(attrs.seats)
            .bind(&attrs.description)
            .bind(status)
            .bind(attrs.featured)
            .bind(images)
            .fetch_one(&self.pool)
            .await?;

        Ok(car)
    }

    /// Newest first; an optional search term is OR-matched case-insensitively
    /// across make, model and color.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Car>> {
        let cars = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let query = format!(
                    "SELECT {} FROM cars
                     WHERE make ILIKE $1 OR model ILIKE $1 OR color ILIKE $1
                     ORDER BY created_at DESC",
                    CAR_COLUMNS
                );
                sqlx::query_as::<_, Car>(&query)
                    .bind(format!("%{}%", term))
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("SELECT {} FROM cars ORDER BY created_at DESC", CAR_COLUMNS);
                sqlx::query_as::<_, Car>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(cars)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Car> {
        let query = format!("SELECT {} FROM cars WHERE id = $1", CAR_COLUMNS);
        let car = sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Partial update: untouched fields keep their value. Status and the
    /// featured flag are independent of each other.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: Option<&str>,
        featured: Option<bool>,
    ) -> Result<Car> {
        let query = format!(
            "UPDATE cars
             SET status = COALESCE($2, status),
                 featured = COALESCE($3, featured),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            CAR_COLUMNS
        );

        let car = sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(status)
            .bind(featured)
            .fetch_one(&self.pool)
            .await?;

        Ok(car)
    }
}
