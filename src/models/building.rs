//! Building model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Building record; rooms reference a building
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Building {
    pub id: i32,
    /// Short building code (e.g. "A")
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
