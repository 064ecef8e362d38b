use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::User;
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, external_id, name, email, image_url, role, created_at, updated_at";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE external_id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Resolves validated token claims to a stored user. Every mutating
    /// handler goes through this before touching the database.
    pub async fn require_user(&self, claims: &Claims) -> Result<User> {
        self.find_by_external_id(&claims.sub)
            .await?
            .ok_or_else(|| Error::Unauthorized("User not found".to_string()))
    }

    /// Like `require_user`, but the stored role (not the token role) must be
    /// ADMIN.
    pub async fn require_admin(&self, claims: &Claims) -> Result<User> {
        let user = self.require_user(claims).await?;
        if !user.is_admin() {
            return Err(Error::Forbidden("Admin access required".to_string()));
        }
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let query = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn update_role(&self, id: Uuid, role: &str) -> Result<User> {
        let query = format!(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }
}
