//! Borrow ticket domain methods on Repository

use chrono::{NaiveDate, Utc};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        borrow_ticket::{BorrowTicket, BorrowTicketDetails, CreateBorrowTicket, TicketQuery},
        enums::TicketStatus,
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT t.id, t.student_id, s.student_code, s.full_name AS student_name,
           t.device_id, d.name AS device_name,
           t.room_id, r.name AS room_name,
           t.status, t.borrowed_at, t.due_date, t.returned_at, t.notes
    FROM borrow_tickets t
    JOIN students s ON s.id = t.student_id
    JOIN devices d ON d.id = t.device_id
    LEFT JOIN rooms r ON r.id = t.room_id
"#;

impl Repository {
    /// List borrow tickets with borrower/device context
    pub async fn tickets_list(&self, query: &TicketQuery) -> AppResult<Vec<BorrowTicketDetails>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.status.is_some() {
            conditions.push(format!("t.status = ${}", idx));
            idx += 1;
        }
        if query.student_id.is_some() {
            conditions.push(format!("t.student_id = ${}", idx));
            idx += 1;
        }
        if query.device_id.is_some() {
            conditions.push(format!("t.device_id = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("{} {} ORDER BY t.borrowed_at DESC", DETAILS_SELECT, where_clause);

        let mut builder = sqlx::query_as::<_, BorrowTicketDetails>(&sql);
        if let Some(status) = query.status {
            builder = builder.bind(status);
        }
        if let Some(student_id) = query.student_id {
            builder = builder.bind(student_id);
        }
        if let Some(device_id) = query.device_id {
            builder = builder.bind(device_id);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get a borrow ticket by ID
    pub async fn tickets_get_by_id(&self, id: i32) -> AppResult<BorrowTicket> {
        sqlx::query_as::<_, BorrowTicket>("SELECT * FROM borrow_tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrow ticket {} not found", id)))
    }

    /// Whether the device has an open (BORROWING) ticket
    pub async fn tickets_device_is_borrowed(&self, device_id: i32) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM borrow_tickets WHERE device_id = $1 AND status = 'BORROWING'",
        )
        .bind(device_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Create a borrow ticket
    pub async fn tickets_create(
        &self,
        data: &CreateBorrowTicket,
        due_date: Option<NaiveDate>,
    ) -> AppResult<BorrowTicket> {
        let row = sqlx::query_as::<_, BorrowTicket>(
            r#"
            INSERT INTO borrow_tickets (student_id, device_id, room_id, due_date, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.student_id)
        .bind(data.device_id)
        .bind(data.room_id)
        .bind(due_date)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Close an open ticket, stamping the return time.
    /// Fails if the ticket is not currently BORROWING.
    pub async fn tickets_return(&self, id: i32, notes: Option<&str>) -> AppResult<BorrowTicket> {
        let returned = sqlx::query_as::<_, BorrowTicket>(
            r#"
            UPDATE borrow_tickets
            SET status = 'RETURNED', returned_at = $1, notes = COALESCE($2, notes)
            WHERE id = $3 AND status = 'BORROWING'
            RETURNING *
            "#,
        )
        .bind(Utc::now())
        .bind(notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match returned {
            Some(ticket) => Ok(ticket),
            None => {
                // Distinguish a missing ticket from one already returned
                self.tickets_get_by_id(id).await?;
                Err(AppError::Conflict(format!(
                    "Borrow ticket {} has already been returned",
                    id
                )))
            }
        }
    }

    /// Update ticket notes only
    pub async fn tickets_update_notes(&self, id: i32, notes: &str) -> AppResult<BorrowTicket> {
        sqlx::query_as::<_, BorrowTicket>(
            "UPDATE borrow_tickets SET notes = $1 WHERE id = $2 RETURNING *",
        )
        .bind(notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrow ticket {} not found", id)))
    }

    /// Count tickets by status (for the dashboard)
    pub async fn tickets_count_by_status(&self, status: TicketStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM borrow_tickets WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Count all tickets
    pub async fn tickets_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrow_tickets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
