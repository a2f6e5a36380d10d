//! Room endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::room::{CreateRoom, FreeRoomQuery, Room, RoomQuery, UpdateRoom},
};

use super::{AuthenticatedUser, PaginatedResponse};

/// List rooms with search and pagination
#[utoipa::path(
    get,
    path = "/room",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(RoomQuery),
    responses(
        (status = 200, description = "List of rooms", body = PaginatedResponse<Room>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_rooms(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<RoomQuery>,
) -> AppResult<Json<PaginatedResponse<Room>>> {
    claims.require_staff()?;

    let (rooms, total) = state.services.rooms.search(&query).await?;

    Ok(Json(PaginatedResponse {
        items: rooms,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Find rooms free for a slot
#[utoipa::path(
    get,
    path = "/room/free",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(FreeRoomQuery),
    responses(
        (status = 200, description = "Rooms free for the requested slot", body = Vec<Room>),
        (status = 400, description = "Invalid slot")
    )
)]
pub async fn find_free_rooms(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<FreeRoomQuery>,
) -> AppResult<Json<Vec<Room>>> {
    claims.require_staff()?;
    let rooms = state.services.rooms.find_free(&query).await?;
    Ok(Json(rooms))
}

/// Get room details by ID
#[utoipa::path(
    get,
    path = "/room/{id}",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Room>> {
    claims.require_staff()?;
    let room = state.services.rooms.get_by_id(id).await?;
    Ok(Json(room))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/room",
    tag = "rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 409, description = "Room code already exists")
    )
)]
pub async fn create_room(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    claims.require_staff()?;
    let room = state.services.rooms.create(&data).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Update a room
#[utoipa::path(
    patch,
    path = "/room/{id}",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn update_room(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    claims.require_staff()?;
    let room = state.services.rooms.update(id, &data).await?;
    Ok(Json(room))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/room/{id}",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn delete_room(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.rooms.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
