//! Room asset management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::room_asset::{AssetQuery, CreateRoomAsset, RoomAsset, UpdateRoomAsset},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomAssetsService {
    repository: Repository,
}

impl RoomAssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List assets with optional filters
    pub async fn list(&self, query: &AssetQuery) -> AppResult<Vec<RoomAsset>> {
        self.repository.assets_list(query).await
    }

    /// Get an asset by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<RoomAsset> {
        self.repository.assets_get_by_id(id).await
    }

    /// Create an asset
    pub async fn create(&self, data: &CreateRoomAsset) -> AppResult<RoomAsset> {
        data.validate()?;
        // Verify the target room exists
        self.repository.rooms_get_by_id(data.room_id).await?;
        if self.repository.assets_code_exists(&data.code).await? {
            return Err(AppError::Conflict(format!(
                "Asset code {} already exists",
                data.code
            )));
        }
        self.repository.assets_create(data).await
    }

    /// Update an asset
    pub async fn update(&self, id: i32, data: &UpdateRoomAsset) -> AppResult<RoomAsset> {
        data.validate()?;
        if let Some(room_id) = data.room_id {
            self.repository.rooms_get_by_id(room_id).await?;
        }
        if let Some(ref code) = data.code {
            let current = self.repository.assets_get_by_id(id).await?;
            if current.code != *code && self.repository.assets_code_exists(code).await? {
                return Err(AppError::Conflict(format!(
                    "Asset code {} already exists",
                    code
                )));
            }
        }
        self.repository.assets_update(id, data).await
    }

    /// Delete an asset
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.assets_delete(id).await
    }
}
