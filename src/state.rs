//! Shared state injected into handlers.
//!
//! Built once at startup by [`crate::server`] and cloned per request.
//! Everything inside is immutable after construction.

use std::sync::Arc;

use crate::application::services::{AuthService, ExperienceService, UserService};

/// State of the events API.
#[derive(Clone)]
pub struct AppState {
    pub experience_service: Arc<ExperienceService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(experience_service: Arc<ExperienceService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            experience_service,
            auth_service,
        }
    }
}

/// State of the legacy users API.
#[derive(Clone)]
pub struct UsersState {
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
}

impl UsersState {
    pub fn new(user_service: Arc<UserService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            user_service,
            auth_service,
        }
    }
}
