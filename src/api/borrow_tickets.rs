//! Borrow ticket endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::borrow_ticket::{
        BorrowTicket, BorrowTicketDetails, CreateBorrowTicket, TicketQuery, UpdateBorrowTicket,
    },
};

use super::AuthenticatedUser;

/// List borrow tickets
#[utoipa::path(
    get,
    path = "/borrow-ticket",
    tag = "borrow-tickets",
    security(("bearer_auth" = [])),
    params(TicketQuery),
    responses(
        (status = 200, description = "List of borrow tickets", body = Vec<BorrowTicketDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_tickets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<TicketQuery>,
) -> AppResult<Json<Vec<BorrowTicketDetails>>> {
    claims.require_staff()?;
    let tickets = state.services.borrow_tickets.list(&query).await?;
    Ok(Json(tickets))
}

/// Get borrow ticket details by ID
#[utoipa::path(
    get,
    path = "/borrow-ticket/{id}",
    tag = "borrow-tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket details", body = BorrowTicket),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<BorrowTicket>> {
    claims.require_staff()?;
    let ticket = state.services.borrow_tickets.get_by_id(id).await?;
    Ok(Json(ticket))
}

/// Open a borrow ticket
#[utoipa::path(
    post,
    path = "/borrow-ticket",
    tag = "borrow-tickets",
    security(("bearer_auth" = [])),
    request_body = CreateBorrowTicket,
    responses(
        (status = 201, description = "Ticket opened", body = BorrowTicket),
        (status = 409, description = "Device is currently borrowed")
    )
)]
pub async fn create_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateBorrowTicket>,
) -> AppResult<(StatusCode, Json<BorrowTicket>)> {
    claims.require_staff()?;
    let ticket = state.services.borrow_tickets.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Update a borrow ticket; setting status to RETURNED closes it
#[utoipa::path(
    patch,
    path = "/borrow-ticket/{id}",
    tag = "borrow-tickets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = UpdateBorrowTicket,
    responses(
        (status = 200, description = "Ticket updated", body = BorrowTicket),
        (status = 409, description = "Ticket already returned")
    )
)]
pub async fn update_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBorrowTicket>,
) -> AppResult<Json<BorrowTicket>> {
    claims.require_staff()?;
    let ticket = state.services.borrow_tickets.update(id, &data).await?;
    Ok(Json(ticket))
}
