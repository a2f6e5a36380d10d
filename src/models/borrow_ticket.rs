//! Borrow ticket model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::TicketStatus;

/// A record of a student borrowing a device
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowTicket {
    pub id: i32,
    pub student_id: i32,
    pub device_id: i32,
    /// Room the device is used in, when known
    pub room_id: Option<i32>,
    pub status: TicketStatus,
    pub borrowed_at: Option<DateTime<Utc>>,
    pub due_date: Option<NaiveDate>,
    pub returned_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Borrow ticket with borrower/device context for list display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowTicketDetails {
    pub id: i32,
    pub student_id: i32,
    pub student_code: String,
    pub student_name: String,
    pub device_id: i32,
    pub device_name: String,
    pub room_id: Option<i32>,
    pub room_name: Option<String>,
    pub status: TicketStatus,
    pub borrowed_at: Option<DateTime<Utc>>,
    pub due_date: Option<NaiveDate>,
    pub returned_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Create borrow ticket request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBorrowTicket {
    pub student_id: i32,
    pub device_id: i32,
    pub room_id: Option<i32>,
    /// Expected return date (YYYY-MM-DD)
    pub due_date: Option<String>,
    pub notes: Option<String>,
}

/// Update borrow ticket request; setting status to RETURNED closes the ticket
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBorrowTicket {
    pub status: Option<TicketStatus>,
    pub notes: Option<String>,
}

/// Borrow ticket list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub student_id: Option<i32>,
    pub device_id: Option<i32>,
}
