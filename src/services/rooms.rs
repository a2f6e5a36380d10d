//! Room management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        building::Building,
        room::{CreateRoom, FreeRoomQuery, Room, RoomQuery, UpdateRoom},
    },
    repository::Repository,
};

use super::schedules::validate_slot;

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List buildings rooms are assigned to
    pub async fn list_buildings(&self) -> AppResult<Vec<Building>> {
        self.repository.buildings_list().await
    }

    /// Search rooms with filters and pagination
    pub async fn search(&self, query: &RoomQuery) -> AppResult<(Vec<Room>, i64)> {
        self.repository.rooms_search(query).await
    }

    /// Get a room by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        self.repository.rooms_get_by_id(id).await
    }

    /// Create a room
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        data.validate()?;
        // Verify building exists
        self.repository.buildings_get_by_id(data.building_id).await?;
        if self.repository.rooms_code_exists(&data.code).await? {
            return Err(AppError::Conflict(format!(
                "Room code {} already exists",
                data.code
            )));
        }
        self.repository.rooms_create(data).await
    }

    /// Update a room
    pub async fn update(&self, id: i32, data: &UpdateRoom) -> AppResult<Room> {
        data.validate()?;
        if let Some(building_id) = data.building_id {
            self.repository.buildings_get_by_id(building_id).await?;
        }
        if let Some(ref code) = data.code {
            let current = self.repository.rooms_get_by_id(id).await?;
            if current.code != *code && self.repository.rooms_code_exists(code).await? {
                return Err(AppError::Conflict(format!("Room code {} already exists", code)));
            }
        }
        self.repository.rooms_update(id, data).await
    }

    /// Delete a room
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.rooms_delete(id).await
    }

    /// Find rooms free for the requested slot.
    ///
    /// Any non-rejected booking intersecting the slot excludes its room, so
    /// a just-submitted (still pending) booking already hides the room from
    /// the next search.
    pub async fn find_free(&self, query: &FreeRoomQuery) -> AppResult<Vec<Room>> {
        let (start, end) = validate_slot(
            &query.start_date,
            &query.end_date,
            query.period_start,
            query.period_end,
        )?;
        self.repository
            .rooms_find_free(start, end, query.period_start, query.period_end)
            .await
    }
}
