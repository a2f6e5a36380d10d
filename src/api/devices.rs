//! Device endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::device::{CreateDevice, Device, DeviceQuery, UpdateDevice},
};

use super::AuthenticatedUser;

/// List devices
#[utoipa::path(
    get,
    path = "/device",
    tag = "devices",
    security(("bearer_auth" = [])),
    params(DeviceQuery),
    responses(
        (status = 200, description = "List of devices", body = Vec<Device>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_devices(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<DeviceQuery>,
) -> AppResult<Json<Vec<Device>>> {
    claims.require_staff()?;
    let devices = state.services.devices.list(&query).await?;
    Ok(Json(devices))
}

/// Get device details by ID
#[utoipa::path(
    get,
    path = "/device/{id}",
    tag = "devices",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Device ID")),
    responses(
        (status = 200, description = "Device details", body = Device),
        (status = 404, description = "Device not found")
    )
)]
pub async fn get_device(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Device>> {
    claims.require_staff()?;
    let device = state.services.devices.get_by_id(id).await?;
    Ok(Json(device))
}

/// Create a device
#[utoipa::path(
    post,
    path = "/device",
    tag = "devices",
    security(("bearer_auth" = [])),
    request_body = CreateDevice,
    responses(
        (status = 201, description = "Device created", body = Device),
        (status = 409, description = "Device code already exists")
    )
)]
pub async fn create_device(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateDevice>,
) -> AppResult<(StatusCode, Json<Device>)> {
    claims.require_staff()?;
    let device = state.services.devices.create(&data).await?;
    Ok((StatusCode::CREATED, Json(device)))
}

/// Update a device
#[utoipa::path(
    patch,
    path = "/device/{id}",
    tag = "devices",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Device ID")),
    request_body = UpdateDevice,
    responses(
        (status = 200, description = "Device updated", body = Device),
        (status = 404, description = "Device not found")
    )
)]
pub async fn update_device(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateDevice>,
) -> AppResult<Json<Device>> {
    claims.require_staff()?;
    let device = state.services.devices.update(id, &data).await?;
    Ok(Json(device))
}
