//! User domain
//!
//! This module provides the user record, the declarative rule table it is
//! checked against, and the validator that applies it.

mod clock;
mod constraints;
mod entity;
mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constraints::{rules, Constraint, FieldRule, RuleDescription};
pub use entity::{FieldValue, User, UserField, UserType};
pub use validation::{validate, validate_at, UserValidator, ValidationError};

/// Messages reported for each constraint
pub mod messages {
    pub use super::constraints::{
        CONTACT_NO_SIZE, DATE_NOT_NULL, DATE_NOT_PAST, DATE_OF_BIRTH_FORMAT, INVALID_CONTACT_NO,
        INVALID_EMAIL, TIME_NOT_NULL, USER_ID_NOT_NULL, USER_NAME_NOT_BLANK,
        USER_NAME_PATTERN_MESSAGE, USER_TYPE_NOT_ALLOWED,
    };
}

#[cfg(test)]
pub use clock::MockClock;
