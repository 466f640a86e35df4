//! User record and related types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock::Clock;

/// Opaque user type
///
/// The set of valid variants is supplied from outside (see
/// `UserValidator::with_allowed_types`); any string is representable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserType(String);

impl UserType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of a [`User`], displayed with their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserField {
    #[serde(rename = "userId")]
    UserId,
    #[serde(rename = "userName")]
    UserName,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "dateOfBirth")]
    DateOfBirth,
    #[serde(rename = "userEmail")]
    UserEmail,
    #[serde(rename = "userContactNo")]
    UserContactNo,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
}

impl UserField {
    pub const ALL: [UserField; 8] = [
        Self::UserId,
        Self::UserName,
        Self::Type,
        Self::DateOfBirth,
        Self::UserEmail,
        Self::UserContactNo,
        Self::Date,
        Self::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserId => "userId",
            Self::UserName => "userName",
            Self::Type => "type",
            Self::DateOfBirth => "dateOfBirth",
            Self::UserEmail => "userEmail",
            Self::UserContactNo => "userContactNo",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of a single field's value, as seen by the constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Integer(i32),
    Text(&'a str),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Registration record for one person
///
/// Every field is nullable so that partially populated input can be
/// represented and then rejected by validation. `date` and `time` are
/// never filled in implicitly; use [`User::stamped`] or
/// [`User::with_timestamp`] to set them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: Option<i32>,
    pub user_name: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<UserType>,
    pub date_of_birth: Option<String>,
    pub user_email: Option<String>,
    pub user_contact_no: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl User {
    /// Create a user with every required field supplied
    pub fn new(user_id: i32, user_name: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            user_id: Some(user_id),
            user_name: Some(user_name.into()),
            date: Some(date),
            time: Some(time),
            ..Self::default()
        }
    }

    /// Create an empty user whose `date` and `time` are taken from `clock`
    pub fn stamped(clock: &dyn Clock) -> Self {
        Self::default().with_timestamp(clock.today(), clock.now())
    }

    pub fn with_timestamp(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.date = Some(date);
        self.time = Some(time);
        self
    }

    pub fn with_user_type(mut self, user_type: impl Into<UserType>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = Some(date_of_birth.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    pub fn with_contact_no(mut self, contact_no: impl Into<String>) -> Self {
        self.user_contact_no = Some(contact_no.into());
        self
    }

    /// Borrow the value of `field`
    pub fn value_of(&self, field: UserField) -> FieldValue<'_> {
        fn text(value: &Option<String>) -> FieldValue<'_> {
            value.as_deref().map_or(FieldValue::Null, FieldValue::Text)
        }

        match field {
            UserField::UserId => self.user_id.map_or(FieldValue::Null, FieldValue::Integer),
            UserField::UserName => text(&self.user_name),
            UserField::Type => self
                .user_type
                .as_ref()
                .map_or(FieldValue::Null, |t| FieldValue::Text(t.as_str())),
            UserField::DateOfBirth => text(&self.date_of_birth),
            UserField::UserEmail => text(&self.user_email),
            UserField::UserContactNo => text(&self.user_contact_no),
            UserField::Date => self.date.map_or(FieldValue::Null, FieldValue::Date),
            UserField::Time => self.time.map_or(FieldValue::Null, FieldValue::Time),
        }
    }
}
