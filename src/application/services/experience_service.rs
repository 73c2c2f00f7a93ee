//! Events and leads service.

use std::sync::Arc;

use crate::domain::entities::{Event, EventInput, Lead, LeadInput};
use crate::domain::repositories::ExperienceRepository;
use crate::error::AppError;

/// Service orchestrating events and leads.
///
/// Currently forwards every call to the repository unchanged. Cross-cutting
/// rules (authorization, notifications) belong here, not in handlers.
pub struct ExperienceService {
    repository: Arc<dyn ExperienceRepository>,
}

impl ExperienceService {
    /// Creates a new experience service.
    pub fn new(repository: Arc<dyn ExperienceRepository>) -> Self {
        Self { repository }
    }

    /// Lists events, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the record store fails.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        self.repository.list_events().await
    }

    /// Retrieves an event by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the event does not exist.
    /// Returns [`AppError::Upstream`] if the record store fails.
    pub async fn get_event(&self, id: &str) -> Result<Event, AppError> {
        self.repository.get_event(id).await
    }

    /// Creates an event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the record store fails or rejects the input.
    pub async fn create_event(&self, input: EventInput) -> Result<Event, AppError> {
        self.repository.create_event(input).await
    }

    /// Records a lead.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the record store fails or rejects the input.
    pub async fn create_lead(&self, input: LeadInput) -> Result<Lead, AppError> {
        self.repository.create_lead(input).await
    }

    /// Reports whether the record store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
