//! User validation service

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ValidationSettings;
use crate::domain::user::{User, UserValidator, ValidationError};
use crate::domain::DomainError;

/// Outcome for one record of a batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReport {
    pub index: usize,
    pub user_id: Option<i32>,
    pub errors: Vec<ValidationError>,
}

impl RecordReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome for a batch of records
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub valid: usize,
    pub invalid: usize,
    pub records: Vec<RecordReport>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Service for validating user records
#[derive(Debug, Clone, Default)]
pub struct UserValidationService {
    validator: UserValidator,
}

impl UserValidationService {
    /// Create a new validation service
    pub fn new(validator: UserValidator) -> Self {
        Self { validator }
    }

    /// Create a service using the system clock and configured settings
    pub fn from_settings(settings: &ValidationSettings) -> Self {
        Self::new(UserValidator::default().with_allowed_types(settings.allowed_types.clone()))
    }

    /// Validate a single user
    pub fn validate(&self, user: &User) -> Result<(), DomainError> {
        self.validator.validate(user).map_err(DomainError::from)
    }

    /// Validate every user and collect a report
    pub fn validate_batch(&self, users: &[User]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (index, user) in users.iter().enumerate() {
            let errors = self.validator.validate(user).err().unwrap_or_default();

            if errors.is_empty() {
                report.valid += 1;
            } else {
                report.invalid += 1;
                warn!(
                    index,
                    user_id = ?user.user_id,
                    violations = errors.len(),
                    "Invalid user record"
                );
            }

            report.records.push(RecordReport {
                index,
                user_id: user.user_id,
                errors,
            });
        }

        info!(
            total = users.len(),
            valid = report.valid,
            invalid = report.invalid,
            "Validated user records"
        );

        report
    }
}
