//! Incident domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::IncidentStatus,
        incident::{CreateIncident, Incident, IncidentDetails, IncidentQuery, UpdateIncident},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT i.id, i.asset_id, a.name AS asset_name,
           a.room_id, r.name AS room_name,
           i.reported_by, u.full_name AS reporter_name,
           i.title, i.description, i.status, i.created_at, i.updated_at
    FROM incidents i
    JOIN room_assets a ON a.id = i.asset_id
    JOIN rooms r ON r.id = a.room_id
    LEFT JOIN users u ON u.id = i.reported_by
"#;

impl Repository {
    /// List incidents with asset/room context
    pub async fn incidents_list(&self, query: &IncidentQuery) -> AppResult<Vec<IncidentDetails>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.status.is_some() {
            conditions.push(format!("i.status = ${}", idx));
            idx += 1;
        }
        if query.asset_id.is_some() {
            conditions.push(format!("i.asset_id = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("{} {} ORDER BY i.created_at DESC", DETAILS_SELECT, where_clause);

        let mut builder = sqlx::query_as::<_, IncidentDetails>(&sql);
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }
        if let Some(asset_id) = query.asset_id {
            builder = builder.bind(asset_id);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get an incident by ID (with context)
    pub async fn incidents_get_by_id(&self, id: i32) -> AppResult<IncidentDetails> {
        let sql = format!("{} WHERE i.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, IncidentDetails>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    /// Create an incident report
    pub async fn incidents_create(
        &self,
        reported_by: i32,
        data: &CreateIncident,
    ) -> AppResult<Incident> {
        let row = sqlx::query_as::<_, Incident>(
            r#"
            INSERT INTO incidents (asset_id, reported_by, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.asset_id)
        .bind(reported_by)
        .bind(&data.title)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an incident
    pub async fn incidents_update(&self, id: i32, data: &UpdateIncident) -> AppResult<Incident> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        if data.title.is_some() { sets.push(format!("title = ${}", idx)); idx += 1; }
        if data.description.is_some() { sets.push(format!("description = ${}", idx)); idx += 1; }
        if data.status.is_some() { sets.push(format!("status = ${}", idx)); }

        let query = format!(
            "UPDATE incidents SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Incident>(&query).bind(now);
        if let Some(ref title) = data.title { builder = builder.bind(title); }
        if let Some(ref description) = data.description { builder = builder.bind(description); }
        if let Some(status) = data.status { builder = builder.bind(status); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    /// Delete an incident
    pub async fn incidents_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM incidents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Incident {} not found", id)));
        }
        Ok(())
    }

    /// Count incidents by status (for the dashboard)
    pub async fn incidents_count_by_status(&self, status: IncidentStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incidents WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count all incidents
    pub async fn incidents_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incidents")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
