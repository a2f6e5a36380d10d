//! Room model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::RoomStatus;

/// Room record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub building_id: i32,
    /// Room code, unique across buildings (e.g. "A-101")
    pub code: String,
    pub name: String,
    pub floor: Option<i16>,
    pub capacity: Option<i32>,
    pub status: RoomStatus,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create room request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoom {
    pub building_id: i32,
    #[validate(length(min = 1, message = "Room code must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "Room name must not be empty"))]
    pub name: String,
    pub floor: Option<i16>,
    pub capacity: Option<i32>,
    pub notes: Option<String>,
}

/// Update room request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoom {
    pub building_id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub floor: Option<i16>,
    pub capacity: Option<i32>,
    pub status: Option<RoomStatus>,
    pub notes: Option<String>,
}

/// Room list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RoomQuery {
    /// Search by room name or code
    pub name: Option<String>,
    pub building_id: Option<i32>,
    pub status: Option<RoomStatus>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Free-room search parameters: a slot is a date range plus a period range
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct FreeRoomQuery {
    /// Slot start date (YYYY-MM-DD)
    pub start_date: String,
    /// Slot end date (YYYY-MM-DD)
    pub end_date: String,
    /// First period of the slot (1..=12)
    pub period_start: i16,
    /// Last period of the slot (1..=12)
    pub period_end: i16,
}
