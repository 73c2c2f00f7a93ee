//! Repository trait for events and leads.

use crate::domain::entities::{Event, EventInput, Lead, LeadInput};
use crate::error::AppError;
use async_trait::async_trait;

/// Access to events and leads held by the external record store.
///
/// Every method issues exactly one outbound call. Nothing is cached.
///
/// # Implementations
///
/// - [`crate::infrastructure::pocketbase::PocketBaseRepository`] - PocketBase REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Lists all events, most recent `start_date` first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure, non-success
    /// status or malformed response.
    async fn list_events(&self) -> Result<Vec<Event>, AppError>;

    /// Fetches a single event by record id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store has no such record.
    /// Returns [`AppError::Upstream`] for any other failure.
    async fn get_event(&self, id: &str) -> Result<Event, AppError>;

    /// Creates an event and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure or when the store
    /// rejects the payload.
    async fn create_event(&self, input: EventInput) -> Result<Event, AppError>;

    /// Creates a lead and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure or when the store
    /// rejects the payload.
    async fn create_lead(&self, input: LeadInput) -> Result<Lead, AppError>;

    /// Reports whether the record store answers its health endpoint.
    async fn health_check(&self) -> bool;
}
