//! Schedule (room booking) domain methods on Repository

use chrono::{NaiveDate, Utc};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ScheduleStatus,
        schedule::{
            CreateSchedule, Schedule, ScheduleDetails, ScheduleQuery, ScheduleWeekRow,
        },
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT s.id, s.room_id, r.code AS room_code, r.name AS room_name,
           s.user_id, u.full_name AS user_name,
           s.start_date, s.end_date, s.period_start, s.period_end,
           s.purpose, s.status, s.created_at
    FROM schedules s
    JOIN rooms r ON r.id = s.room_id
    JOIN users u ON u.id = s.user_id
"#;

impl Repository {
    /// List bookings with room/requester context
    pub async fn schedules_list(&self, query: &ScheduleQuery) -> AppResult<Vec<ScheduleDetails>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.room_id.is_some() {
            conditions.push(format!("s.room_id = ${}", idx));
            idx += 1;
        }
        if query.user_id.is_some() {
            conditions.push(format!("s.user_id = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("s.status = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "{} {} ORDER BY s.start_date DESC, s.id DESC",
            DETAILS_SELECT, where_clause
        );

        let mut builder = sqlx::query_as::<_, ScheduleDetails>(&sql);
        if let Some(room_id) = query.room_id {
            builder = builder.bind(room_id);
        }
        if let Some(user_id) = query.user_id {
            builder = builder.bind(user_id);
        }
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get a booking by ID
    pub async fn schedules_get_by_id(&self, id: i32) -> AppResult<Schedule> {
        sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", id)))
    }

    /// Create a booking (status defaults to pending)
    pub async fn schedules_create(
        &self,
        user_id: i32,
        data: &CreateSchedule,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Schedule> {
        let row = sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules (room_id, user_id, start_date, end_date, period_start, period_end, purpose)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.room_id)
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .bind(data.period_start)
        .bind(data.period_end)
        .bind(&data.purpose)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Transition a booking's status
    pub async fn schedules_update_status(
        &self,
        id: i32,
        status: ScheduleStatus,
    ) -> AppResult<Schedule> {
        sqlx::query_as::<_, Schedule>(
            "UPDATE schedules SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", id)))
    }

    /// Non-rejected bookings of a room intersecting the given slot
    pub async fn schedules_find_overlapping(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        period_start: i16,
        period_end: i16,
    ) -> AppResult<Vec<Schedule>> {
        let rows = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules
            WHERE room_id = $1
              AND status <> 'rejected'
              AND start_date <= $3 AND end_date >= $2
              AND period_start <= $5 AND period_end >= $4
            ORDER BY id
            "#,
        )
        .bind(room_id)
        .bind(start_date)
        .bind(end_date)
        .bind(period_start)
        .bind(period_end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Approved bookings whose date range touches the given week
    pub async fn schedules_list_week(
        &self,
        monday: NaiveDate,
        sunday: NaiveDate,
    ) -> AppResult<Vec<ScheduleWeekRow>> {
        let rows = sqlx::query_as::<_, ScheduleWeekRow>(
            r#"
            SELECT s.id AS schedule_id, s.room_id, r.name AS room_name,
                   u.full_name AS booked_by, s.purpose,
                   s.start_date, s.end_date, s.period_start, s.period_end
            FROM schedules s
            JOIN rooms r ON r.id = s.room_id
            JOIN users u ON u.id = s.user_id
            WHERE s.status = 'approved'
              AND s.start_date <= $2 AND s.end_date >= $1
            ORDER BY s.id
            "#,
        )
        .bind(monday)
        .bind(sunday)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count bookings by status (for the dashboard)
    pub async fn schedules_count_by_status(&self, status: ScheduleStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedules WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count all bookings
    pub async fn schedules_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedules")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
