//! Room domain methods on Repository

use chrono::{NaiveDate, Utc};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RoomStatus,
        room::{CreateRoom, Room, RoomQuery, UpdateRoom},
    },
};

impl Repository {
    /// Search rooms with filters and pagination, returning (rooms, total)
    pub async fn rooms_search(&self, query: &RoomQuery) -> AppResult<(Vec<Room>, i64)> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.name.is_some() {
            conditions.push(format!("(name ILIKE ${i} OR code ILIKE ${i})", i = idx));
            idx += 1;
        }
        if query.building_id.is_some() {
            conditions.push(format!("building_id = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM rooms {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(ref name) = query.name {
            count_query = count_query.bind(format!("%{}%", name));
        }
        if let Some(building_id) = query.building_id {
            count_query = count_query.bind(building_id);
        }
        if let Some(status) = query.status {
            count_query = count_query.bind(status);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let list_sql = format!(
            "SELECT * FROM rooms {} ORDER BY code LIMIT ${} OFFSET ${}",
            where_clause,
            idx,
            idx + 1
        );

        let mut list_query = sqlx::query_as::<_, Room>(&list_sql);
        if let Some(ref name) = query.name {
            list_query = list_query.bind(format!("%{}%", name));
        }
        if let Some(building_id) = query.building_id {
            list_query = list_query.bind(building_id);
        }
        if let Some(status) = query.status {
            list_query = list_query.bind(status);
        }
        let rooms = list_query
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await?;

        Ok((rooms, total))
    }

    /// Get a room by ID
    pub async fn rooms_get_by_id(&self, id: i32) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }

    /// Check whether a room code is already taken
    pub async fn rooms_code_exists(&self, code: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE code = $1")
            .bind(code)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Create a room
    pub async fn rooms_create(&self, data: &CreateRoom) -> AppResult<Room> {
        let row = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (building_id, code, name, floor, capacity, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.building_id)
        .bind(&data.code)
        .bind(&data.name)
        .bind(data.floor)
        .bind(data.capacity)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a room
    pub async fn rooms_update(&self, id: i32, data: &UpdateRoom) -> AppResult<Room> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        if data.building_id.is_some() { sets.push(format!("building_id = ${}", idx)); idx += 1; }
        if data.code.is_some() { sets.push(format!("code = ${}", idx)); idx += 1; }
        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.floor.is_some() { sets.push(format!("floor = ${}", idx)); idx += 1; }
        if data.capacity.is_some() { sets.push(format!("capacity = ${}", idx)); idx += 1; }
        if data.status.is_some() { sets.push(format!("status = ${}", idx)); idx += 1; }
        if data.notes.is_some() { sets.push(format!("notes = ${}", idx)); }

        let query = format!(
            "UPDATE rooms SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Room>(&query).bind(now);
        if let Some(building_id) = data.building_id { builder = builder.bind(building_id); }
        if let Some(ref code) = data.code { builder = builder.bind(code); }
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(floor) = data.floor { builder = builder.bind(floor); }
        if let Some(capacity) = data.capacity { builder = builder.bind(capacity); }
        if let Some(status) = data.status { builder = builder.bind(status); }
        if let Some(ref notes) = data.notes { builder = builder.bind(notes); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }

    /// Delete a room
    pub async fn rooms_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Room {} not found", id)));
        }
        Ok(())
    }

    /// Find active rooms with no non-rejected booking intersecting the slot.
    ///
    /// A freshly submitted booking is still `pending`, so the room disappears
    /// from free-room results the moment the booking row exists.
    pub async fn rooms_find_free(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        period_start: i16,
        period_end: i16,
    ) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, Room>(
            r#"
            SELECT r.* FROM rooms r
            WHERE r.status = 'active'
              AND NOT EXISTS (
                SELECT 1 FROM schedules s
                WHERE s.room_id = r.id
                  AND s.status <> 'rejected'
                  AND s.start_date <= $2 AND s.end_date >= $1
                  AND s.period_start <= $4 AND s.period_end >= $3
              )
            ORDER BY r.code
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .bind(period_start)
        .bind(period_end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count rooms by status (for the dashboard)
    pub async fn rooms_count_by_status(&self, status: RoomStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count all rooms
    pub async fn rooms_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
