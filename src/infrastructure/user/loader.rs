//! JSON loading of user records

use serde_json::Value;

use crate::domain::user::User;
use crate::domain::DomainError;

/// Parse either a single user object or an array of user objects
pub fn parse_users(input: &str) -> Result<Vec<User>, DomainError> {
    match serde_json::from_str::<Value>(input)? {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        value @ Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        _ => Err(DomainError::parse(
            "Expected a user object or an array of user objects",
        )),
    }
}
