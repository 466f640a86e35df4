//! Infrastructure layer - Logging and user record services

pub mod logging;
pub mod user;
