//! User validation

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::constraints::{rules, USER_TYPE_NOT_ALLOWED};
use super::entity::{User, UserField};

/// A violated constraint on one field of a user record
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: UserField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: UserField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Applies the user rule table against a clock
///
/// Every failing rule is reported, in table order, so one field may
/// appear more than once.
#[derive(Clone)]
pub struct UserValidator {
    clock: Arc<dyn Clock>,
    allowed_types: Option<BTreeSet<String>>,
}

impl std::fmt::Debug for UserValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserValidator")
            .field("allowed_types", &self.allowed_types)
            .finish_non_exhaustive()
    }
}

impl Default for UserValidator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl UserValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            allowed_types: None,
        }
    }

    /// Restrict `type` to the given variants
    ///
    /// An empty iterator leaves `type` unrestricted.
    pub fn with_allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: BTreeSet<String> = types.into_iter().map(Into::into).collect();
        self.allowed_types = (!types.is_empty()).then_some(types);
        self
    }

    /// Validate against the clock's current date
    pub fn validate(&self, user: &User) -> Result<(), Vec<ValidationError>> {
        self.validate_at(user, self.clock.today())
    }

    /// Validate with `today` as the reference date for past-date checks
    pub fn validate_at(&self, user: &User, today: NaiveDate) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = Vec::new();

        for rule in rules() {
            if !rule.constraint.is_satisfied(&user.value_of(rule.field), today) {
                errors.push(ValidationError::new(rule.field, rule.message));
            }
        }

        if let (Some(allowed), Some(user_type)) = (&self.allowed_types, &user.user_type) {
            if !allowed.contains(user_type.as_str()) {
                errors.push(ValidationError::new(UserField::Type, USER_TYPE_NOT_ALLOWED));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(
                user_id = ?user.user_id,
                violations = errors.len(),
                "User failed validation"
            );
            Err(errors)
        }
    }
}

/// Validate `user` against the system clock with no type restriction
pub fn validate(user: &User) -> Result<(), Vec<ValidationError>> {
    UserValidator::default().validate(user)
}

/// Validate `user` with an explicit reference date
pub fn validate_at(user: &User, today: NaiveDate) -> Result<(), Vec<ValidationError>> {
    UserValidator::default().validate_at(user, today)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::domain::user::clock::{FixedClock, MockClock};
    use crate::domain::user::constraints::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn valid_user() -> User {
        User::new(1, "John Doe", today().pred_opt().unwrap(), noon())
            .with_contact_no("919876543210")
            .with_email("john@example.com")
            .with_date_of_birth("1990-01-01")
    }

    fn errors_for(user: &User) -> Vec<ValidationError> {
        validate_at(user, today()).unwrap_err()
    }

    fn fields(errors: &[ValidationError]) -> Vec<UserField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_user() {
        assert_eq!(validate_at(&valid_user(), today()), Ok(()));
    }

    #[test]
    fn test_minimal_valid_user() {
        let user = User::new(1, "A", today().pred_opt().unwrap(), noon());
        assert!(validate_at(&user, today()).is_ok());
    }

    #[test]
    fn test_every_field_invalid() {
        let user = User {
            user_id: None,
            user_name: Some("John123".to_string()),
            user_type: None,
            date_of_birth: Some("01-01-1990".to_string()),
            user_email: Some("bad".to_string()),
            user_contact_no: Some("123".to_string()),
            date: today().succ_opt(),
            time: None,
        };

        let errors = errors_for(&user);

        assert_eq!(
            errors,
            vec![
                ValidationError::new(UserField::UserId, USER_ID_NOT_NULL),
                ValidationError::new(UserField::UserName, USER_NAME_PATTERN_MESSAGE),
                ValidationError::new(UserField::DateOfBirth, DATE_OF_BIRTH_FORMAT),
                ValidationError::new(UserField::UserEmail, INVALID_EMAIL),
                ValidationError::new(UserField::UserContactNo, CONTACT_NO_SIZE),
                ValidationError::new(UserField::UserContactNo, INVALID_CONTACT_NO),
                ValidationError::new(UserField::Date, DATE_NOT_PAST),
                ValidationError::new(UserField::Time, TIME_NOT_NULL),
            ]
        );
    }

    #[test]
    fn test_null_user_id() {
        let user = User {
            user_id: None,
            ..valid_user()
        };

        assert_eq!(fields(&errors_for(&user)), vec![UserField::UserId]);
    }

    #[test]
    fn test_user_name_with_digit_or_symbol() {
        for name in ["John1", "John-Doe", "J@ne", "Jane."] {
            let user = User {
                user_name: Some(name.to_string()),
                ..valid_user()
            };

            assert_eq!(
                errors_for(&user),
                vec![ValidationError::new(UserField::UserName, USER_NAME_PATTERN_MESSAGE)],
                "{name}"
            );
        }
    }

    #[test]
    fn test_blank_user_name_reported_once() {
        for name in [None, Some(""), Some("   ")] {
            let user = User {
                user_name: name.map(str::to_string),
                ..valid_user()
            };

            assert_eq!(
                errors_for(&user),
                vec![ValidationError::new(UserField::UserName, USER_NAME_NOT_BLANK)]
            );
        }
    }

    #[test]
    fn test_contact_number_formats() {
        assert!(validate_at(&valid_user().with_contact_no("910000000000"), today()).is_ok());

        for contact_no in ["819876543210", "91987654321x", "+91987654321", "12345678901a"] {
            let errors = errors_for(&valid_user().with_contact_no(contact_no));
            assert_eq!(
                errors,
                vec![ValidationError::new(UserField::UserContactNo, INVALID_CONTACT_NO)],
                "{contact_no}"
            );
        }
    }

    #[test]
    fn test_contact_number_reports_size_and_pattern() {
        for contact_no in ["123", "9198765432101"] {
            let errors = errors_for(&valid_user().with_contact_no(contact_no));
            assert_eq!(
                errors,
                vec![
                    ValidationError::new(UserField::UserContactNo, CONTACT_NO_SIZE),
                    ValidationError::new(UserField::UserContactNo, INVALID_CONTACT_NO),
                ],
                "{contact_no}"
            );
        }
    }

    #[test]
    fn test_empty_contact_number_fails_size_only() {
        let errors = errors_for(&valid_user().with_contact_no(""));

        assert_eq!(
            errors,
            vec![ValidationError::new(UserField::UserContactNo, CONTACT_NO_SIZE)]
        );
    }

    #[test]
    fn test_email() {
        assert!(validate_at(&valid_user().with_email("a@b.com"), today()).is_ok());

        let errors = errors_for(&valid_user().with_email("not-an-email"));
        assert_eq!(errors, vec![ValidationError::new(UserField::UserEmail, INVALID_EMAIL)]);
    }

    #[test]
    fn test_date_of_birth_is_not_parsed() {
        assert!(validate_at(&valid_user().with_date_of_birth("2023-13-40"), today()).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent_or_empty() {
        let absent = User::new(2, "Jane", today().pred_opt().unwrap(), noon());
        let empty = absent
            .clone()
            .with_email("")
            .with_date_of_birth("");

        assert!(validate_at(&absent, today()).is_ok());
        assert!(validate_at(&empty, today()).is_ok());
    }

    #[test]
    fn test_date_must_be_strictly_past() {
        let user = valid_user().with_timestamp(today(), noon());

        assert_eq!(
            errors_for(&user),
            vec![ValidationError::new(UserField::Date, DATE_NOT_PAST)]
        );
    }

    #[test]
    fn test_missing_date_reports_not_null_only() {
        let user = User {
            date: None,
            ..valid_user()
        };

        assert_eq!(
            errors_for(&user),
            vec![ValidationError::new(UserField::Date, DATE_NOT_NULL)]
        );
    }

    #[test]
    fn test_stamped_user_fails_same_day() {
        let clock = Arc::new(FixedClock::new(today(), noon()));
        let user = User {
            user_id: Some(1),
            user_name: Some("John".to_string()),
            ..User::stamped(clock.as_ref())
        };

        let errors = UserValidator::new(clock).validate(&user).unwrap_err();

        assert_eq!(errors, vec![ValidationError::new(UserField::Date, DATE_NOT_PAST)]);
    }

    #[test]
    fn test_validator_reads_clock() {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .times(1)
            .returning(|| NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());

        let validator = UserValidator::new(Arc::new(clock));
        let errors = validator.validate(&valid_user()).unwrap_err();

        assert_eq!(fields(&errors), vec![UserField::Date]);
    }

    #[test]
    fn test_allowed_types() {
        let validator = UserValidator::new(Arc::new(FixedClock::new(today(), noon())))
            .with_allowed_types(["ADMIN", "MEMBER"]);

        assert!(validator.validate(&valid_user().with_user_type("ADMIN")).is_ok());
        assert!(validator.validate(&valid_user()).is_ok());

        let errors = validator
            .validate(&valid_user().with_user_type("GUEST"))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::new(UserField::Type, USER_TYPE_NOT_ALLOWED)]
        );
    }

    #[test]
    fn test_empty_allowed_types_is_unrestricted() {
        let validator = UserValidator::default().with_allowed_types(Vec::<String>::new());

        assert!(validator
            .validate_at(&valid_user().with_user_type("ANYTHING"), today())
            .is_ok());
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new(UserField::Date, DATE_NOT_PAST);
        assert_eq!(error.to_string(), "date: Date must be in the past");
    }
}
