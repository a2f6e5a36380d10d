//! Incident report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::IncidentStatus;

/// A fault reported against a room asset
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Incident {
    pub id: i32,
    pub asset_id: i32,
    /// User who filed the report
    pub reported_by: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub status: IncidentStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Incident with asset and room context for list display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct IncidentDetails {
    pub id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub room_id: i32,
    pub room_name: String,
    pub reported_by: Option<i32>,
    pub reporter_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: IncidentStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create incident request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateIncident {
    pub asset_id: i32,
    #[validate(length(min = 1, message = "Incident title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// Update incident request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateIncident {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<IncidentStatus>,
}

/// Incident list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct IncidentQuery {
    pub status: Option<IncidentStatus>,
    pub asset_id: Option<i32>,
}
