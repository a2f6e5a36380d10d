//! User domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::user::{Role, UpdateUser, User, UserQuery},
};

impl Repository {
    /// Search users with pagination, returning (users, total)
    pub async fn users_search(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        let where_clause = if query.name.is_some() {
            "WHERE (full_name ILIKE $1 OR username ILIKE $1)"
        } else {
            ""
        };

        let count_sql = format!("SELECT COUNT(*) FROM users {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(ref name) = query.name {
            count_query = count_query.bind(format!("%{}%", name));
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let next_idx = if query.name.is_some() { 2 } else { 1 };
        let list_sql = format!(
            "SELECT * FROM users {} ORDER BY username LIMIT ${} OFFSET ${}",
            where_clause,
            next_idx,
            next_idx + 1
        );

        let mut list_query = sqlx::query_as::<_, User>(&list_sql);
        if let Some(ref name) = query.name {
            list_query = list_query.bind(format!("%{}%", name));
        }
        let users = list_query
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await?;

        Ok((users, total))
    }

    /// Get a user by ID
    pub async fn users_get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get a user by username
    pub async fn users_get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Create a user; the password must already be hashed
    pub async fn users_create(
        &self,
        username: &str,
        password_hash: &str,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        role: Role,
    ) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, full_name, email, phone, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a user
    pub async fn users_update(&self, id: i32, data: &UpdateUser) -> AppResult<User> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        if data.username.is_some() { sets.push(format!("username = ${}", idx)); idx += 1; }
        if data.full_name.is_some() { sets.push(format!("full_name = ${}", idx)); idx += 1; }
        if data.email.is_some() { sets.push(format!("email = ${}", idx)); idx += 1; }
        if data.phone.is_some() { sets.push(format!("phone = ${}", idx)); idx += 1; }
        if data.role.is_some() { sets.push(format!("role = ${}", idx)); }

        let query = format!(
            "UPDATE users SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, User>(&query).bind(now);
        if let Some(ref username) = data.username { builder = builder.bind(username); }
        if let Some(ref full_name) = data.full_name { builder = builder.bind(full_name); }
        if let Some(ref email) = data.email { builder = builder.bind(email); }
        if let Some(ref phone) = data.phone { builder = builder.bind(phone); }
        if let Some(role) = data.role { builder = builder.bind(role); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Replace a user's password hash
    pub async fn users_update_password(&self, id: i32, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password = $1, updated_at = $2 WHERE id = $3")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    /// Delete a user
    pub async fn users_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    /// Count all users
    pub async fn users_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
