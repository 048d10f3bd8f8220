//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant renders as the user-facing constraint message for the field
/// that rejected the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is invalid.
    InvalidAddress(String),

    /// The provided last-visit date does not parse as a calendar date.
    InvalidDate(String),

    /// The provided last-visit date lies in the future.
    FutureDate(String),

    /// The provided tag name is invalid.
    InvalidTag(String),

    /// The provided medicine name is invalid.
    InvalidMedicine(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name \"{}\": names should contain only alphanumeric characters \
                 and spaces, and must not be blank",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number \"{}\": phone numbers should contain only digits \
                 and be at least 3 digits long",
                phone
            ),
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email \"{}\": emails should be of the form local@domain, where \
                 the domain contains at least one dot and no empty labels",
                email
            ),
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid address \"{}\": addresses can take any value but must not be blank",
                address
            ),
            Self::InvalidDate(date) => write!(
                f,
                "Invalid date \"{}\": last-visit dates should follow the YYYY-MM-DD format",
                date
            ),
            Self::FutureDate(date) => {
                write!(f, "Invalid date \"{}\": last-visit dates cannot be after today", date)
            }
            Self::InvalidTag(tag) => write!(
                f,
                "Invalid tag \"{}\": tag names should be alphanumeric with no spaces",
                tag
            ),
            Self::InvalidMedicine(medicine) => write!(
                f,
                "Invalid medicine \"{}\": medicine names should be alphanumeric with no spaces",
                medicine
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
