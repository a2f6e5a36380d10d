//! Incident report endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::incident::{
        CreateIncident, Incident, IncidentDetails, IncidentQuery, UpdateIncident,
    },
};

use super::AuthenticatedUser;

/// List incidents
#[utoipa::path(
    get,
    path = "/incident",
    tag = "incidents",
    security(("bearer_auth" = [])),
    params(IncidentQuery),
    responses(
        (status = 200, description = "List of incidents", body = Vec<IncidentDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_incidents(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<IncidentQuery>,
) -> AppResult<Json<Vec<IncidentDetails>>> {
    claims.require_staff()?;
    let incidents = state.services.incidents.list(&query).await?;
    Ok(Json(incidents))
}

/// Get incident details by ID
#[utoipa::path(
    get,
    path = "/incident/{id}",
    tag = "incidents",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incident ID")),
    responses(
        (status = 200, description = "Incident details", body = IncidentDetails),
        (status = 404, description = "Incident not found")
    )
)]
pub async fn get_incident(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<IncidentDetails>> {
    claims.require_staff()?;
    let incident = state.services.incidents.get_by_id(id).await?;
    Ok(Json(incident))
}

/// Report an incident
#[utoipa::path(
    post,
    path = "/incident",
    tag = "incidents",
    security(("bearer_auth" = [])),
    request_body = CreateIncident,
    responses(
        (status = 201, description = "Incident reported", body = Incident),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn create_incident(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateIncident>,
) -> AppResult<(StatusCode, Json<Incident>)> {
    claims.require_staff()?;
    let incident = state
        .services
        .incidents
        .create(claims.user_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(incident)))
}

/// Update an incident
#[utoipa::path(
    patch,
    path = "/incident/{id}",
    tag = "incidents",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incident ID")),
    request_body = UpdateIncident,
    responses(
        (status = 200, description = "Incident updated", body = Incident),
        (status = 404, description = "Incident not found")
    )
)]
pub async fn update_incident(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateIncident>,
) -> AppResult<Json<Incident>> {
    claims.require_staff()?;
    let incident = state.services.incidents.update(id, &data).await?;
    Ok(Json(incident))
}

/// Delete an incident
#[utoipa::path(
    delete,
    path = "/incident/{id}",
    tag = "incidents",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Incident ID")),
    responses(
        (status = 204, description = "Incident deleted"),
        (status = 404, description = "Incident not found")
    )
)]
pub async fn delete_incident(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.incidents.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
