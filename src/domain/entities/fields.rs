//! Validated value objects making up a [`Person`](super::Person).
//!
//! Every optional field accepts the empty string, meaning "not provided".
//! Attribute fields (price, subject, level, status, role) know which
//! [`TagCategory`] they generate.

use crate::domain::entities::tag::{Tag, TagCategory};
use crate::domain::errors::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use validator::ValidateEmail;

/// Alphanumeric words; the first character may not be a space.
static WORDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{Nd}][\p{Alphabetic}\p{Nd} ]*$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,}$").unwrap());

static PRICE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Full name of a person. Required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !WORDS_REGEX.is_match(&value) {
            return Err(ValidationError::new(
                "name",
                "Person names should only contain alphanumeric characters and spaces, and it should not be blank",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !value.is_empty() && !PHONE_REGEX.is_match(&value) {
            return Err(ValidationError::new(
                "phone",
                "Phone numbers can only contain numbers, and should be at least 3 digits long",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !value.is_empty() && !value.validate_email() {
            return Err(ValidationError::new(
                "email",
                "Person emails should be 2 parts separated by '@'",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.starts_with(char::is_whitespace) {
            return Err(ValidationError::new(
                "address",
                "Person addresses can take any values, but should not start with whitespace",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form note attached to a person. Any text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Remark(String);

impl Remark {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Remark {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Hourly price, a non-negative whole number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(String);

impl Price {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !value.is_empty() && !PRICE_REGEX.is_match(&value) {
            return Err(ValidationError::new(
                "price",
                "Price should only contain numbers",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The derived tag, or `None` when no price was given.
    pub fn tag(&self) -> Option<Tag> {
        (!self.0.is_empty()).then(|| Tag::attribute(&self.0, TagCategory::Price))
    }
}

/// Declares an optional, word-valued attribute that derives a tag.
macro_rules! word_attribute {
    ($(#[$doc:meta])* $ty:ident, $field:literal, $category:expr, $message:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if !value.is_empty() && !WORDS_REGEX.is_match(&value) {
                    return Err(ValidationError::new($field, $message));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The derived tag, or `None` when the attribute is empty.
            pub fn tag(&self) -> Option<Tag> {
                (!self.0.is_empty()).then(|| Tag::attribute(&self.0, $category))
            }
        }
    };
}

word_attribute!(
    /// Subject taught or studied, e.g. `Math`.
    Subject,
    "subject",
    TagCategory::Subject,
    "Subject should only contain alphanumeric characters and spaces"
);
word_attribute!(
    /// Education level, e.g. `Lower Sec`.
    Level,
    "level",
    TagCategory::Level,
    "Level should only contain alphanumeric characters and spaces"
);
word_attribute!(
    /// Matching status, e.g. `Not Matched`.
    Status,
    "status",
    TagCategory::Status,
    "Status should only contain alphanumeric characters and spaces"
);
word_attribute!(
    /// `Student` or `Tutor`, free text.
    Role,
    "role",
    TagCategory::Role,
    "Role should only contain alphanumeric characters and spaces"
);

/// Shared string plumbing: `Display`, serde conversions.
macro_rules! string_conversions {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )*
    };
}

string_conversions!(Name, Phone, Email, Address, Remark, Price, Subject, Level, Status, Role);

/// `TryFrom<String>` for every validated value, used by serde on load.
macro_rules! try_from_string {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }
        )*
    };
}

try_from_string!(Name, Phone, Email, Address, Price, Subject, Level, Status, Role);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(Name::new("Alice Pauline").is_ok());
        assert!(Name::new("R2 D2").is_ok());
        assert!(Name::new("").is_err());
        assert!(Name::new(" Alice").is_err());
        assert!(Name::new("peter*").is_err());
    }

    #[test]
    fn test_optional_fields_accept_empty() {
        assert!(Phone::new("").is_ok());
        assert!(Email::new("").is_ok());
        assert!(Address::new("").is_ok());
        assert!(Price::new("").is_ok());
        assert!(Subject::new("").is_ok());
        assert!(Role::new("").is_ok());
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9011p041").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::new("alice@example.com").is_ok());
        assert!(Email::new("alice.example.com").is_err());
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn test_address_rejects_leading_whitespace() {
        assert!(Address::new("Blk 456, Den Road, #01-355").is_ok());
        assert!(Address::new(" Blk 456").is_err());
    }

    #[test]
    fn test_price_validation_and_tag() {
        let err = Price::new("fifty").unwrap_err();
        assert_eq!(err.field(), "price");
        assert!(Price::new("-5").is_err());

        let price = Price::new("50").unwrap();
        assert_eq!(
            price.tag(),
            Some(Tag::new("50", TagCategory::Price).unwrap())
        );
        assert_eq!(Price::default().tag(), None);
    }

    #[test]
    fn test_word_attribute_tags() {
        let level = Level::new("Lower Sec").unwrap();
        let tag = level.tag().unwrap();
        assert_eq!(tag.name(), "Lower Sec");
        assert_eq!(tag.category(), TagCategory::Level);
        assert!(Status::new("Not-Matched").is_err());
    }

    #[test]
    fn test_serde_rejects_invalid_values() {
        let price: Result<Price, _> = serde_json::from_str("\"12a\"");
        assert!(price.is_err());
        let name: Name = serde_json::from_str("\"Bob\"").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }
}
