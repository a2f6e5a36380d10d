//! Building endpoints (read-only)

use axum::{extract::State, Json};

use crate::{error::AppResult, models::building::Building};

use super::AuthenticatedUser;

/// List buildings
#[utoipa::path(
    get,
    path = "/building",
    tag = "buildings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of buildings", body = Vec<Building>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_buildings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Building>>> {
    claims.require_staff()?;
    let buildings = state.services.rooms.list_buildings().await?;
    Ok(Json(buildings))
}
