//! Room booking (schedule) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::ScheduleStatus;

/// A room booking request covering a period range on every day of a date range
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub id: i32,
    pub room_id: i32,
    /// User who submitted the booking
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// First occupied period (1..=12)
    pub period_start: i16,
    /// Last occupied period (1..=12)
    pub period_end: i16,
    pub purpose: Option<String>,
    pub status: ScheduleStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Booking with room and requester context for list display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleDetails {
    pub id: i32,
    pub room_id: i32,
    pub room_code: String,
    pub room_name: String,
    pub user_id: i32,
    pub user_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub period_start: i16,
    pub period_end: i16,
    pub purpose: Option<String>,
    pub status: ScheduleStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Row feeding the weekly grid layout (approved bookings joined with context)
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleWeekRow {
    pub schedule_id: i32,
    pub room_id: i32,
    pub room_name: String,
    pub booked_by: String,
    pub purpose: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub period_start: i16,
    pub period_end: i16,
}

/// Create booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSchedule {
    pub room_id: i32,
    /// Booking start date (YYYY-MM-DD)
    pub start_date: String,
    /// Booking end date (YYYY-MM-DD)
    pub end_date: String,
    /// First period of the slot (1..=12)
    pub period_start: i16,
    /// Last period of the slot (1..=12)
    pub period_end: i16,
    pub purpose: Option<String>,
}

/// Booking status transition (approve / reject)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateScheduleStatus {
    pub status: ScheduleStatus,
}

/// Booking list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ScheduleQuery {
    pub room_id: Option<i32>,
    pub user_id: Option<i32>,
    pub status: Option<ScheduleStatus>,
}

/// Weekly grid query: any date inside the requested week
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct WeekQuery {
    /// A date within the week to display (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
}
