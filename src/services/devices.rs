//! Device management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::device::{CreateDevice, Device, DeviceQuery, UpdateDevice},
    repository::Repository,
};

#[derive(Clone)]
pub struct DevicesService {
    repository: Repository,
}

impl DevicesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List devices with optional filters
    pub async fn list(&self, query: &DeviceQuery) -> AppResult<Vec<Device>> {
        self.repository.devices_list(query).await
    }

    /// Get a device by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Device> {
        self.repository.devices_get_by_id(id).await
    }

    /// Create a device
    pub async fn create(&self, data: &CreateDevice) -> AppResult<Device> {
        data.validate()?;
        if self.repository.devices_code_exists(&data.code).await? {
            return Err(AppError::Conflict(format!(
                "Device code {} already exists",
                data.code
            )));
        }
        self.repository.devices_create(data).await
    }

    /// Update a device
    pub async fn update(&self, id: i32, data: &UpdateDevice) -> AppResult<Device> {
        data.validate()?;
        if let Some(ref code) = data.code {
            let current = self.repository.devices_get_by_id(id).await?;
            if current.code != *code && self.repository.devices_code_exists(code).await? {
                return Err(AppError::Conflict(format!(
                    "Device code {} already exists",
                    code
                )));
            }
        }
        self.repository.devices_update(id, data).await
    }
}
