//! Building domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::building::Building,
};

impl Repository {
    /// List all buildings
    pub async fn buildings_list(&self) -> AppResult<Vec<Building>> {
        let rows = sqlx::query_as::<_, Building>("SELECT * FROM buildings ORDER BY code")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a building by ID
    pub async fn buildings_get_by_id(&self, id: i32) -> AppResult<Building> {
        sqlx::query_as::<_, Building>("SELECT * FROM buildings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Building {} not found", id)))
    }
}
