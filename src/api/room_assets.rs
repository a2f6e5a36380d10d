//! Room asset endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::room_asset::{AssetQuery, CreateRoomAsset, RoomAsset, UpdateRoomAsset},
};

use super::AuthenticatedUser;

/// List room assets
#[utoipa::path(
    get,
    path = "/room-assets",
    tag = "room-assets",
    security(("bearer_auth" = [])),
    params(AssetQuery),
    responses(
        (status = 200, description = "List of assets", body = Vec<RoomAsset>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<AssetQuery>,
) -> AppResult<Json<Vec<RoomAsset>>> {
    claims.require_staff()?;
    let assets = state.services.room_assets.list(&query).await?;
    Ok(Json(assets))
}

/// Get asset details by ID
#[utoipa::path(
    get,
    path = "/room-assets/{id}",
    tag = "room-assets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details", body = RoomAsset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<RoomAsset>> {
    claims.require_staff()?;
    let asset = state.services.room_assets.get_by_id(id).await?;
    Ok(Json(asset))
}

/// Create an asset
#[utoipa::path(
    post,
    path = "/room-assets",
    tag = "room-assets",
    security(("bearer_auth" = [])),
    request_body = CreateRoomAsset,
    responses(
        (status = 201, description = "Asset created", body = RoomAsset),
        (status = 409, description = "Asset code already exists")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRoomAsset>,
) -> AppResult<(StatusCode, Json<RoomAsset>)> {
    claims.require_staff()?;
    let asset = state.services.room_assets.create(&data).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Update an asset
#[utoipa::path(
    patch,
    path = "/room-assets/{id}",
    tag = "room-assets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    request_body = UpdateRoomAsset,
    responses(
        (status = 200, description = "Asset updated", body = RoomAsset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRoomAsset>,
) -> AppResult<Json<RoomAsset>> {
    claims.require_staff()?;
    let asset = state.services.room_assets.update(id, &data).await?;
    Ok(Json(asset))
}

/// Delete an asset
#[utoipa::path(
    delete,
    path = "/room-assets/{id}",
    tag = "room-assets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.room_assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
