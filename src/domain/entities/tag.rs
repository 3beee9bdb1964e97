//! Tag value object.

use crate::domain::errors::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Generic tags are single alphanumeric words.
static GENERIC_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{Nd}]+$").unwrap());

/// What a tag was derived from.
///
/// Every category except [`TagCategory::Generic`] is produced mechanically from
/// the matching person attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagCategory {
    Price,
    Level,
    Subject,
    Status,
    Role,
    Generic,
}

impl TagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Price => "PRICE",
            TagCategory::Level => "LEVEL",
            TagCategory::Subject => "SUBJECT",
            TagCategory::Status => "STATUS",
            TagCategory::Role => "ROLE",
            TagCategory::Generic => "GENERIC",
        }
    }

    pub fn is_attribute(&self) -> bool {
        !matches!(self, TagCategory::Generic)
    }
}

/// An immutable (name, category) label. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    category: TagCategory,
}

impl Tag {
    /// Creates a tag, validating the name for its category.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name is blank, or if a generic tag
    /// name is not a single alphanumeric word.
    pub fn new(name: impl Into<String>, category: TagCategory) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new("tag", "Tag names should not be blank"));
        }
        if category == TagCategory::Generic && !GENERIC_TAG_REGEX.is_match(&name) {
            return Err(ValidationError::new(
                "tag",
                "Tags names should be alphanumeric",
            ));
        }
        Ok(Self { name, category })
    }

    /// Creates a generic (user supplied) tag.
    pub fn generic(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, TagCategory::Generic)
    }

    /// Builds an attribute tag from an already validated, non-empty value.
    pub(crate) fn attribute(name: &str, category: TagCategory) -> Self {
        debug_assert!(category.is_attribute() && !name.is_empty());
        Self {
            name: name.to_string(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> TagCategory {
        self.category
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
