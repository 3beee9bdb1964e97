//! Errors raised by value objects, entity lists and the address book.

use std::fmt;

/// Which entity list an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Pair,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Pair => "pair",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value object rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the value object that failed, e.g. `"price"`.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Failures of the uniqueness-enforcing lists and the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("an equal {0} already exists")]
    Duplicate(EntityKind),

    #[error("the {0} could not be found")]
    NotFound(EntityKind),

    /// Pre-validated data turned out to break an invariant.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
