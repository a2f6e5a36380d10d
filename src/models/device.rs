//! Borrowable device (tool) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::DeviceStatus;

/// A device students can borrow (HDMI cable, remote, microphone, ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Device {
    pub id: i32,
    /// Inventory code, unique
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub status: DeviceStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create device request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDevice {
    #[validate(length(min = 1, message = "Device code must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "Device name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
}

/// Update device request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDevice {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<DeviceStatus>,
}

/// Device list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DeviceQuery {
    pub status: Option<DeviceStatus>,
    /// Search by device name or code
    pub name: Option<String>,
}
