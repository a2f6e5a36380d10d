//! Student model
//!
//! Students are provisioned from the academic system; this API only reads
//! them (they appear as borrowers on borrow tickets).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Student record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    /// Student identifier from the academic system (e.g. "SE171234")
    pub student_code: String,
    pub full_name: String,
    pub email: Option<String>,
    pub class_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Student list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StudentQuery {
    /// Search by name or student code
    pub name: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
