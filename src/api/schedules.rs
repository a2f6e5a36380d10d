//! Room booking endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::schedule::{
        CreateSchedule, Schedule, ScheduleDetails, ScheduleQuery, UpdateScheduleStatus, WeekQuery,
    },
    timetable::WeekGrid,
};

use super::AuthenticatedUser;

/// List bookings
#[utoipa::path(
    get,
    path = "/schedule",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(ScheduleQuery),
    responses(
        (status = 200, description = "List of bookings", body = Vec<ScheduleDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_schedules(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<ScheduleQuery>,
) -> AppResult<Json<Vec<ScheduleDetails>>> {
    claims.require_staff()?;
    let schedules = state.services.schedules.list(&query).await?;
    Ok(Json(schedules))
}

/// Weekly timetable grid of approved bookings
#[utoipa::path(
    get,
    path = "/schedule/week",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(WeekQuery),
    responses(
        (status = 200, description = "7x12 grid for the requested week", body = WeekGrid),
        (status = 400, description = "Invalid date")
    )
)]
pub async fn week_grid(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<WeekGrid>> {
    claims.require_staff()?;
    let grid = state
        .services
        .schedules
        .week_grid(query.date.as_deref())
        .await?;
    Ok(Json(grid))
}

/// Get booking details by ID
#[utoipa::path(
    get,
    path = "/schedule/{id}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Booking details", body = Schedule),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Schedule>> {
    claims.require_staff()?;
    let schedule = state.services.schedules.get_by_id(id).await?;
    Ok(Json(schedule))
}

/// Submit a room booking
#[utoipa::path(
    post,
    path = "/schedule",
    tag = "schedules",
    security(("bearer_auth" = [])),
    request_body = CreateSchedule,
    responses(
        (status = 201, description = "Booking submitted", body = Schedule),
        (status = 400, description = "Invalid slot"),
        (status = 409, description = "Room already booked for the slot")
    )
)]
pub async fn create_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateSchedule>,
) -> AppResult<(StatusCode, Json<Schedule>)> {
    claims.require_staff()?;
    let schedule = state
        .services
        .schedules
        .create(claims.user_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Approve or reject a pending booking
#[utoipa::path(
    patch,
    path = "/schedule/{id}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Schedule ID")),
    request_body = UpdateScheduleStatus,
    responses(
        (status = 200, description = "Booking status updated", body = Schedule),
        (status = 422, description = "Booking is not pending")
    )
)]
pub async fn update_schedule_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateScheduleStatus>,
) -> AppResult<Json<Schedule>> {
    claims.require_admin()?;
    let schedule = state.services.schedules.update_status(id, &data).await?;
    Ok(Json(schedule))
}
