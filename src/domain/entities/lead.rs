//! Lead entity capturing inbound interest from the marketing site.

use chrono::{DateTime, Utc};

/// A contact request stored by the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub event_type: String,
    pub budget: String,
    pub message: String,
    /// Assigned by the store on creation.
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a lead.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadInput {
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub event_type: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
}
