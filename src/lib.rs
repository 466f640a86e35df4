//! User Model
//!
//! A user registration record with an explicit validation contract:
//! - Declarative, enumerable rule table
//! - Accumulated per-field validation errors
//! - Injectable clock for past-date checks
//! - JSON loading and batch reporting

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::user::{validate, User, UserValidator, ValidationError};
