//! Incident report service

use validator::Validate;

use crate::{
    error::AppResult,
    models::incident::{
        CreateIncident, Incident, IncidentDetails, IncidentQuery, UpdateIncident,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct IncidentsService {
    repository: Repository,
}

impl IncidentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List incidents with optional filters
    pub async fn list(&self, query: &IncidentQuery) -> AppResult<Vec<IncidentDetails>> {
        self.repository.incidents_list(query).await
    }

    /// Get an incident by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<IncidentDetails> {
        self.repository.incidents_get_by_id(id).await
    }

    /// File an incident report against an asset
    pub async fn create(&self, reported_by: i32, data: &CreateIncident) -> AppResult<Incident> {
        data.validate()?;
        // Verify the asset exists
        self.repository.assets_get_by_id(data.asset_id).await?;
        self.repository.incidents_create(reported_by, data).await
    }

    /// Update an incident (title, description, status)
    pub async fn update(&self, id: i32, data: &UpdateIncident) -> AppResult<Incident> {
        data.validate()?;
        self.repository.incidents_update(id, data).await
    }

    /// Delete an incident
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.incidents_delete(id).await
    }
}
