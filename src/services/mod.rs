//! Business logic services

pub mod borrow_tickets;
pub mod dashboard;
pub mod devices;
pub mod incidents;
pub mod room_assets;
pub mod rooms;
pub mod schedules;
pub mod students;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub rooms: rooms::RoomsService,
    pub room_assets: room_assets::RoomAssetsService,
    pub devices: devices::DevicesService,
    pub students: students::StudentsService,
    pub incidents: incidents::IncidentsService,
    pub borrow_tickets: borrow_tickets::BorrowTicketsService,
    pub schedules: schedules::SchedulesService,
    pub users: users::UsersService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            rooms: rooms::RoomsService::new(repository.clone()),
            room_assets: room_assets::RoomAssetsService::new(repository.clone()),
            devices: devices::DevicesService::new(repository.clone()),
            students: students::StudentsService::new(repository.clone()),
            incidents: incidents::IncidentsService::new(repository.clone()),
            borrow_tickets: borrow_tickets::BorrowTicketsService::new(repository.clone()),
            schedules: schedules::SchedulesService::new(repository.clone()),
            users: users::UsersService::new(repository.clone(), auth_config),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
