//! Student domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::student::{Student, StudentQuery},
};

impl Repository {
    /// Search students with pagination, returning (students, total)
    pub async fn students_search(&self, query: &StudentQuery) -> AppResult<(Vec<Student>, i64)> {
        let where_clause = if query.name.is_some() {
            "WHERE (full_name ILIKE $1 OR student_code ILIKE $1)"
        } else {
            ""
        };

        let count_sql = format!("SELECT COUNT(*) FROM students {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(ref name) = query.name {
            count_query = count_query.bind(format!("%{}%", name));
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let next_idx = if query.name.is_some() { 2 } else { 1 };
        let list_sql = format!(
            "SELECT * FROM students {} ORDER BY student_code LIMIT ${} OFFSET ${}",
            where_clause,
            next_idx,
            next_idx + 1
        );

        let mut list_query = sqlx::query_as::<_, Student>(&list_sql);
        if let Some(ref name) = query.name {
            list_query = list_query.bind(format!("%{}%", name));
        }
        let students = list_query
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await?;

        Ok((students, total))
    }

    /// Get a student by ID
    pub async fn students_get_by_id(&self, id: i32) -> AppResult<Student> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))
    }

    /// Count all students
    pub async fn students_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
