//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, borrow_tickets, buildings, dashboard, devices, health, incidents, room_assets, rooms,
    schedules, students, users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atrium API",
        version = "1.0.0",
        description = "Facility Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Atrium Team", email = "dev@atrium.edu.vn")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Buildings
        buildings::list_buildings,
        // Rooms
        rooms::list_rooms,
        rooms::find_free_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Room assets
        room_assets::list_assets,
        room_assets::get_asset,
        room_assets::create_asset,
        room_assets::update_asset,
        room_assets::delete_asset,
        // Incidents
        incidents::list_incidents,
        incidents::get_incident,
        incidents::create_incident,
        incidents::update_incident,
        incidents::delete_incident,
        // Devices
        devices::list_devices,
        devices::get_device,
        devices::create_device,
        devices::update_device,
        // Students
        students::list_students,
        students::get_student,
        // Borrow tickets
        borrow_tickets::list_tickets,
        borrow_tickets::get_ticket,
        borrow_tickets::create_ticket,
        borrow_tickets::update_ticket,
        // Schedules
        schedules::list_schedules,
        schedules::week_grid,
        schedules::get_schedule,
        schedules::create_schedule,
        schedules::update_schedule_status,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::change_password,
        // Dashboard
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Buildings
            crate::models::building::Building,
            // Rooms
            crate::models::room::Room,
            crate::models::room::CreateRoom,
            crate::models::room::UpdateRoom,
            crate::models::room::RoomQuery,
            crate::models::room::FreeRoomQuery,
            // Room assets
            crate::models::room_asset::RoomAsset,
            crate::models::room_asset::CreateRoomAsset,
            crate::models::room_asset::UpdateRoomAsset,
            crate::models::room_asset::AssetQuery,
            // Incidents
            crate::models::incident::Incident,
            crate::models::incident::IncidentDetails,
            crate::models::incident::CreateIncident,
            crate::models::incident::UpdateIncident,
            crate::models::incident::IncidentQuery,
            // Devices
            crate::models::device::Device,
            crate::models::device::CreateDevice,
            crate::models::device::UpdateDevice,
            crate::models::device::DeviceQuery,
            // Students
            crate::models::student::Student,
            crate::models::student::StudentQuery,
            // Borrow tickets
            crate::models::borrow_ticket::BorrowTicket,
            crate::models::borrow_ticket::BorrowTicketDetails,
            crate::models::borrow_ticket::CreateBorrowTicket,
            crate::models::borrow_ticket::UpdateBorrowTicket,
            crate::models::borrow_ticket::TicketQuery,
            // Schedules
            crate::models::schedule::Schedule,
            crate::models::schedule::ScheduleDetails,
            crate::models::schedule::CreateSchedule,
            crate::models::schedule::UpdateScheduleStatus,
            crate::models::schedule::ScheduleQuery,
            crate::models::schedule::WeekQuery,
            // Timetable
            crate::timetable::WeekGrid,
            crate::timetable::DayColumn,
            crate::timetable::GridCell,
            crate::timetable::GridBooking,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::ChangePassword,
            crate::models::user::UserQuery,
            crate::models::user::Role,
            // Enums
            crate::models::enums::RoomStatus,
            crate::models::enums::AssetStatus,
            crate::models::enums::DeviceStatus,
            crate::models::enums::IncidentStatus,
            crate::models::enums::TicketStatus,
            crate::models::enums::ScheduleStatus,
            // Dashboard
            crate::services::dashboard::DashboardResponse,
            crate::services::dashboard::RoomStats,
            crate::services::dashboard::AssetStats,
            crate::services::dashboard::IncidentStats,
            crate::services::dashboard::TicketStats,
            crate::services::dashboard::ScheduleStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "buildings", description = "Building reference data"),
        (name = "rooms", description = "Room management"),
        (name = "room-assets", description = "Room asset management"),
        (name = "incidents", description = "Incident reports"),
        (name = "devices", description = "Borrowable devices"),
        (name = "students", description = "Student lookup"),
        (name = "borrow-tickets", description = "Device borrow tickets"),
        (name = "schedules", description = "Room bookings and weekly timetable"),
        (name = "users", description = "User management"),
        (name = "dashboard", description = "Dashboard counters")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
