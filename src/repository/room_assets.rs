//! Room asset domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::AssetStatus,
        room_asset::{AssetQuery, CreateRoomAsset, RoomAsset, UpdateRoomAsset},
    },
};

impl Repository {
    /// List assets with optional filters
    pub async fn assets_list(&self, query: &AssetQuery) -> AppResult<Vec<RoomAsset>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.room_id.is_some() {
            conditions.push(format!("room_id = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }
        if query.name.is_some() {
            conditions.push(format!("(name ILIKE ${i} OR code ILIKE ${i})", i = idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("SELECT * FROM room_assets {} ORDER BY code", where_clause);

        let mut builder = sqlx::query_as::<_, RoomAsset>(&sql);
        if let Some(room_id) = query.room_id {
            builder = builder.bind(room_id);
        }
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }
        if let Some(ref name) = query.name {
            builder = builder.bind(format!("%{}%", name));
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get an asset by ID
    pub async fn assets_get_by_id(&self, id: i32) -> AppResult<RoomAsset> {
        sqlx::query_as::<_, RoomAsset>("SELECT * FROM room_assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room asset {} not found", id)))
    }

    /// Check whether an asset inventory code is already taken
    pub async fn assets_code_exists(&self, code: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room_assets WHERE code = $1")
            .bind(code)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Create an asset
    pub async fn assets_create(&self, data: &CreateRoomAsset) -> AppResult<RoomAsset> {
        let row = sqlx::query_as::<_, RoomAsset>(
            r#"
            INSERT INTO room_assets (room_id, code, name, category, quantity, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.room_id)
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.quantity.unwrap_or(1))
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an asset
    pub async fn assets_update(&self, id: i32, data: &UpdateRoomAsset) -> AppResult<RoomAsset> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        if data.room_id.is_some() { sets.push(format!("room_id = ${}", idx)); idx += 1; }
        if data.code.is_some() { sets.push(format!("code = ${}", idx)); idx += 1; }
        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.category.is_some() { sets.push(format!("category = ${}", idx)); idx += 1; }
        if data.quantity.is_some() { sets.push(format!("quantity = ${}", idx)); idx += 1; }
        if data.status.is_some() { sets.push(format!("status = ${}", idx)); idx += 1; }
        if data.notes.is_some() { sets.push(format!("notes = ${}", idx)); }

        let query = format!(
            "UPDATE room_assets SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, RoomAsset>(&query).bind(now);
        if let Some(room_id) = data.room_id { builder = builder.bind(room_id); }
        if let Some(ref code) = data.code { builder = builder.bind(code); }
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(ref category) = data.category { builder = builder.bind(category); }
        if let Some(quantity) = data.quantity { builder = builder.bind(quantity); }
        if let Some(status) = data.status { builder = builder.bind(status); }
        if let Some(ref notes) = data.notes { builder = builder.bind(notes); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room asset {} not found", id)))
    }

    /// Delete an asset
    pub async fn assets_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM room_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room asset {} not found", id)));
        }
        Ok(())
    }

    /// Count assets by status (for the dashboard)
    pub async fn assets_count_by_status(&self, status: AssetStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room_assets WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count all assets
    pub async fn assets_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room_assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
