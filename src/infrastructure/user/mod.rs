//! User infrastructure module
//!
//! This module provides loading of user records from JSON and a validation
//! service that reports on batches of records.

mod loader;
mod service;

pub use loader::parse_users;
pub use service::{RecordReport, UserValidationService, ValidationReport};
