//! Dashboard summary service

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::enums::{AssetStatus, IncidentStatus, RoomStatus, ScheduleStatus, TicketStatus},
    repository::Repository,
};

/// Room counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomStats {
    pub total: i64,
    pub active: i64,
    pub maintenance: i64,
}

/// Asset counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssetStats {
    pub total: i64,
    pub active: i64,
    pub maintenance: i64,
}

/// Incident counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IncidentStats {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
}

/// Borrow ticket counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketStats {
    pub total: i64,
    pub borrowing: i64,
    pub returned: i64,
}

/// Booking counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
}

/// Aggregated counters shown on the dashboard landing page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub rooms: RoomStats,
    pub assets: AssetStats,
    pub incidents: IncidentStats,
    pub borrow_tickets: TicketStats,
    pub schedules: ScheduleStats,
    pub devices: i64,
    pub users: i64,
    pub students: i64,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Collect entity counters for the dashboard
    pub async fn summary(&self) -> AppResult<DashboardResponse> {
        let rooms = RoomStats {
            total: self.repository.rooms_count().await?,
            active: self.repository.rooms_count_by_status(RoomStatus::Active).await?,
            maintenance: self
                .repository
                .rooms_count_by_status(RoomStatus::Maintenance)
                .await?,
        };
        let assets = AssetStats {
            total: self.repository.assets_count().await?,
            active: self
                .repository
                .assets_count_by_status(AssetStatus::Active)
                .await?,
            maintenance: self
                .repository
                .assets_count_by_status(AssetStatus::Maintenance)
                .await?,
        };
        let incidents = IncidentStats {
            total: self.repository.incidents_count().await?,
            pending: self
                .repository
                .incidents_count_by_status(IncidentStatus::Pending)
                .await?,
            in_progress: self
                .repository
                .incidents_count_by_status(IncidentStatus::InProgress)
                .await?,
        };
        let borrow_tickets = TicketStats {
            total: self.repository.tickets_count().await?,
            borrowing: self
                .repository
                .tickets_count_by_status(TicketStatus::Borrowing)
                .await?,
            returned: self
                .repository
                .tickets_count_by_status(TicketStatus::Returned)
                .await?,
        };
        let schedules = ScheduleStats {
            total: self.repository.schedules_count().await?,
            pending: self
                .repository
                .schedules_count_by_status(ScheduleStatus::Pending)
                .await?,
            approved: self
                .repository
                .schedules_count_by_status(ScheduleStatus::Approved)
                .await?,
        };

        Ok(DashboardResponse {
            rooms,
            assets,
            incidents,
            borrow_tickets,
            schedules,
            devices: self.repository.devices_count().await?,
            users: self.repository.users_count().await?,
            students: self.repository.students_count().await?,
        })
    }
}
