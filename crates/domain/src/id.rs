//! Typed device identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HouseError, ValidationError};

/// Opaque, caller-chosen identifier for a [`Device`](crate::device::Device)
/// (e.g. `Living_Room`).
///
/// Uniqueness is not enforced: a house may hold several devices with the
/// same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when `value` is empty or only
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, HouseError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(Self(value))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DeviceId {
    type Err = HouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DeviceId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(value))
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_the_given_text() {
        let id = DeviceId::new("Living_Room").unwrap();
        assert_eq!(id.as_str(), "Living_Room");
        assert_eq!(id.to_string(), "Living_Room");
    }

    #[test]
    fn should_return_validation_error_when_empty() {
        let result = DeviceId::new("");
        assert!(matches!(
            result,
            Err(HouseError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_return_validation_error_when_only_whitespace() {
        assert!("   ".parse::<DeviceId>().is_err());
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = DeviceId::new("Patio").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Patio\"");
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_reject_empty_string_when_deserializing() {
        let result: Result<DeviceId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
