//! Borrow ticket service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow_ticket::{
            BorrowTicket, BorrowTicketDetails, CreateBorrowTicket, TicketQuery, UpdateBorrowTicket,
        },
        enums::{DeviceStatus, TicketStatus},
    },
    repository::Repository,
};

use super::schedules::parse_date;

#[derive(Clone)]
pub struct BorrowTicketsService {
    repository: Repository,
}

impl BorrowTicketsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List borrow tickets with optional filters
    pub async fn list(&self, query: &TicketQuery) -> AppResult<Vec<BorrowTicketDetails>> {
        self.repository.tickets_list(query).await
    }

    /// Get a borrow ticket by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowTicket> {
        self.repository.tickets_get_by_id(id).await
    }

    /// Open a borrow ticket for a student and device.
    ///
    /// The device must be active and not already out on an open ticket.
    pub async fn create(&self, data: &CreateBorrowTicket) -> AppResult<BorrowTicket> {
        data.validate()?;
        self.repository.students_get_by_id(data.student_id).await?;

        let device = self.repository.devices_get_by_id(data.device_id).await?;
        if device.status != DeviceStatus::Active {
            return Err(AppError::BusinessRule(format!(
                "Device {} is not available for borrowing",
                device.code
            )));
        }
        if self.repository.tickets_device_is_borrowed(data.device_id).await? {
            return Err(AppError::Conflict(format!(
                "Device {} is currently borrowed",
                device.code
            )));
        }
        if let Some(room_id) = data.room_id {
            self.repository.rooms_get_by_id(room_id).await?;
        }

        let due_date = match data.due_date.as_deref() {
            Some(value) => Some(parse_date(value, "due_date")?),
            None => None,
        };

        self.repository.tickets_create(data, due_date).await
    }

    /// Apply a ticket update; setting status to RETURNED closes the ticket
    pub async fn update(&self, id: i32, data: &UpdateBorrowTicket) -> AppResult<BorrowTicket> {
        match data.status {
            Some(TicketStatus::Returned) => {
                self.repository.tickets_return(id, data.notes.as_deref()).await
            }
            Some(TicketStatus::Borrowing) => Err(AppError::Validation(
                "Tickets can only be transitioned to RETURNED".to_string(),
            )),
            None => match data.notes.as_deref() {
                Some(notes) => self.repository.tickets_update_notes(id, notes).await,
                None => Err(AppError::BadRequest("Nothing to update".to_string())),
            },
        }
    }
}
