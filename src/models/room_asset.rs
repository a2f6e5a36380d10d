//! Room asset (equipment) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::AssetStatus;

/// A piece of equipment or furniture assigned to a room
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoomAsset {
    pub id: i32,
    pub room_id: i32,
    /// Inventory code, unique (e.g. "PRJ-0042")
    pub code: String,
    pub name: String,
    /// Free-form category (projector, desk, air conditioner, ...)
    pub category: Option<String>,
    pub quantity: i32,
    pub status: AssetStatus,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create asset request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomAsset {
    pub room_id: i32,
    #[validate(length(min = 1, message = "Asset code must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "Asset name must not be empty"))]
    pub name: String,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub notes: Option<String>,
}

/// Update asset request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomAsset {
    pub room_id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub status: Option<AssetStatus>,
    pub notes: Option<String>,
}

/// Asset list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AssetQuery {
    pub room_id: Option<i32>,
    pub status: Option<AssetStatus>,
    /// Search by asset name or code
    pub name: Option<String>,
}
