//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod events;
pub mod health;
pub mod leads;
pub mod users;

pub use events::{create_event_handler, get_event_handler, list_events_handler};
pub use health::health_handler;
pub use leads::create_lead_handler;
pub use users::{get_user_handler, update_user_handler};
