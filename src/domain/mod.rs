//! Domain layer - Core entities and validation rules

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    rules, validate, validate_at, Clock, Constraint, FieldRule, FieldValue, FixedClock, SystemClock,
    User, UserField, UserType, UserValidator, ValidationError,
};
