//! Address value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for addresses.
///
/// Addresses can take any value as long as the first character is not
/// whitespace, so a blank string is never a valid address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address, validating that it is not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is empty or
    /// starts with whitespace.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();

        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }

        Ok(Self(address))
    }

    /// Validate address format.
    fn is_valid(address: &str) -> bool {
        address
            .chars()
            .next()
            .map(|c| !c.is_whitespace())
            .unwrap_or(false)
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_valid() {
        let address = Address::new("123, Jurong West Ave 6, #08-111").unwrap();
        assert_eq!(address.as_str(), "123, Jurong West Ave 6, #08-111");
    }

    #[test]
    fn test_address_validates_format() {
        assert!(Address::new("").is_err());
        assert!(Address::new(" ").is_err());
        assert!(Address::new(" leading whitespace").is_err());
        assert!(Address::new("-").is_ok());
        assert!(Address::new("wall street").is_ok());
        assert!(Address::new("Leng Inc; 1234 Market St; San Francisco CA 2349879; USA").is_ok());
    }

    #[test]
    fn test_address_serialization() {
        let address = Address::new("little tokyo").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"little tokyo\"");
    }

    #[test]
    fn test_address_deserialization_invalid_fails() {
        let result: Result<Address, _> = serde_json::from_str("\" \"");
        assert!(result.is_err());
    }
}
