//! Declarative constraint table for [`User`](super::User)
//!
//! Every constraint a user record must satisfy is listed in [`rules`], in
//! evaluation order. Nothing outside this table contributes to validity
//! except the optional allowed-type set on `UserValidator`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::ValidateEmail;

use super::entity::{FieldValue, UserField};

/// Letters and spaces only
pub static USER_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("user name pattern is valid"));

/// `yyyy-mm-dd` as text; the date itself is not parsed
pub static DATE_OF_BIRTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date of birth pattern is valid"));

/// `91` followed by ten digits
pub static CONTACT_NO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^91[0-9]{10}$").expect("contact number pattern is valid"));

pub const USER_ID_NOT_NULL: &str = "must not be null";
pub const USER_NAME_NOT_BLANK: &str = "must not be blank";
pub const USER_NAME_PATTERN_MESSAGE: &str = "must match \"^[a-zA-Z ]+$\"";
pub const DATE_OF_BIRTH_FORMAT: &str = "Date of birth must be in yyyy-mm-dd format";
pub const INVALID_EMAIL: &str = "Invalid email format. Please enter a valid Email!";
pub const CONTACT_NO_SIZE: &str = "size must be between 12 and 12";
pub const INVALID_CONTACT_NO: &str =
    "Enter a Valid Phone Number,Phone number must start with 91 and be followed by 10 digits";
pub const DATE_NOT_NULL: &str = "Date cannot be null";
pub const DATE_NOT_PAST: &str = "Date must be in the past";
pub const TIME_NOT_NULL: &str = "Time cannot be null";
pub const USER_TYPE_NOT_ALLOWED: &str = "must be one of the allowed user types";

/// A single kind of check applied to one field value
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Value must be present
    NotNull,
    /// Value must be present and contain a non-whitespace character
    NotBlank,
    /// Non-empty text must fully match the regex
    Pattern(&'static Lazy<Regex>),
    /// Non-empty text must be a syntactically valid email address
    Email,
    /// Text length in characters must lie in `min..=max`, empty text included
    Length { min: usize, max: usize },
    /// Date must be strictly before the reference date
    Past,
}

impl Constraint {
    /// Check `value` against this constraint
    ///
    /// Only `NotNull` and `NotBlank` reject a null value; optional fields
    /// are otherwise left to them.
    pub fn is_satisfied(&self, value: &FieldValue<'_>, today: NaiveDate) -> bool {
        match (self, value) {
            (Self::NotNull, value) => !value.is_null(),
            (Self::NotBlank, FieldValue::Null) => false,
            (Self::NotBlank, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Self::NotBlank, _) => true,
            (Self::Pattern(regex), FieldValue::Text(text)) => text.is_empty() || regex.is_match(text),
            (Self::Email, FieldValue::Text(text)) => text.is_empty() || text.validate_email(),
            (Self::Length { min, max }, FieldValue::Text(text)) => {
                (*min..=*max).contains(&text.chars().count())
            }
            (Self::Past, FieldValue::Date(date)) => *date < today,
            _ => true,
        }
    }

    /// Short description of the constraint
    pub fn describe(&self) -> String {
        match self {
            Self::NotNull => "not null".to_string(),
            Self::NotBlank => "not blank".to_string(),
            Self::Pattern(regex) => format!("pattern {}", regex.as_str()),
            Self::Email => "email".to_string(),
            Self::Length { min, max } => format!("length {}..={}", min, max),
            Self::Past => "past date".to_string(),
        }
    }
}

/// A constraint bound to a field, with the message reported on violation
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: UserField,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl FieldRule {
    const fn new(field: UserField, constraint: Constraint, message: &'static str) -> Self {
        Self {
            field,
            constraint,
            message,
        }
    }
}

/// Serializable summary of a rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleDescription {
    pub field: UserField,
    pub constraint: String,
    pub message: &'static str,
}

impl From<&FieldRule> for RuleDescription {
    fn from(rule: &FieldRule) -> Self {
        Self {
            field: rule.field,
            constraint: rule.constraint.describe(),
            message: rule.message,
        }
    }
}

static RULES: [FieldRule; 10] = [
    FieldRule::new(UserField::UserId, Constraint::NotNull, USER_ID_NOT_NULL),
    FieldRule::new(UserField::UserName, Constraint::NotBlank, USER_NAME_NOT_BLANK),
    FieldRule::new(
        UserField::UserName,
        Constraint::Pattern(&USER_NAME_PATTERN),
        USER_NAME_PATTERN_MESSAGE,
    ),
    FieldRule::new(
        UserField::DateOfBirth,
        Constraint::Pattern(&DATE_OF_BIRTH_PATTERN),
        DATE_OF_BIRTH_FORMAT,
    ),
    FieldRule::new(UserField::UserEmail, Constraint::Email, INVALID_EMAIL),
    FieldRule::new(
        UserField::UserContactNo,
        Constraint::Length { min: 12, max: 12 },
        CONTACT_NO_SIZE,
    ),
    FieldRule::new(
        UserField::UserContactNo,
        Constraint::Pattern(&CONTACT_NO_PATTERN),
        INVALID_CONTACT_NO,
    ),
    FieldRule::new(UserField::Date, Constraint::NotNull, DATE_NOT_NULL),
    FieldRule::new(UserField::Date, Constraint::Past, DATE_NOT_PAST),
    FieldRule::new(UserField::Time, Constraint::NotNull, TIME_NOT_NULL),
];

/// All field rules in evaluation order
pub fn rules() -> &'static [FieldRule] {
    &RULES
}
