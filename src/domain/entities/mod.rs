//! Core domain entities.
//!
//! Entities are plain data structures. Each exposed record has a matching
//! input type used for creation:
//!
//! - [`Event`] / [`EventInput`] - experiences published on the site
//! - [`Lead`] / [`LeadInput`] - marketing contact submissions
//! - [`User`] / [`UserUpdate`] - rows of the legacy `users` table

pub mod event;
pub mod lead;
pub mod user;

pub use event::{Event, EventInput};
pub use lead::{Lead, LeadInput};
pub use user::{User, UserUpdate};
