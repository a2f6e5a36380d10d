//! Device domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::device::{CreateDevice, Device, DeviceQuery, UpdateDevice},
};

impl Repository {
    /// List devices with optional filters
    pub async fn devices_list(&self, query: &DeviceQuery) -> AppResult<Vec<Device>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

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

        let sql = format!("SELECT * FROM devices {} ORDER BY code", where_clause);

        let mut builder = sqlx::query_as::<_, Device>(&sql);
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }
        if let Some(ref name) = query.name {
            builder = builder.bind(format!("%{}%", name));
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get a device by ID
    pub async fn devices_get_by_id(&self, id: i32) -> AppResult<Device> {
        sqlx::query_as::<_, Device>("SELECT * FROM devices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Device {} not found", id)))
    }

    /// Check whether a device inventory code is already taken
    pub async fn devices_code_exists(&self, code: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM devices WHERE code = $1")
            .bind(code)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Create a device
    pub async fn devices_create(&self, data: &CreateDevice) -> AppResult<Device> {
        let row = sqlx::query_as::<_, Device>(
            r#"
            INSERT INTO devices (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a device
    pub async fn devices_update(&self, id: i32, data: &UpdateDevice) -> AppResult<Device> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        if data.code.is_some() { sets.push(format!("code = ${}", idx)); idx += 1; }
        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.description.is_some() { sets.push(format!("description = ${}", idx)); idx += 1; }
        if data.status.is_some() { sets.push(format!("status = ${}", idx)); }

        let query = format!(
            "UPDATE devices SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Device>(&query).bind(now);
        if let Some(ref code) = data.code { builder = builder.bind(code); }
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(ref description) = data.description { builder = builder.bind(description); }
        if let Some(status) = data.status { builder = builder.bind(status); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Device {} not found", id)))
    }

    /// Count all devices
    pub async fn devices_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM devices")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
