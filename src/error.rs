//! Command-level error type shared by the application layer and the shell.

use crate::domain::errors::{EntityKind, ModelError, ValidationError};
use serde::Serialize;
use serde_json::{Value, json};

/// Shown when a one-based index does not exist in the displayed person list.
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book.";
pub const MESSAGE_DUPLICATE_PAIR: &str = "This pair already exists in the address book.";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorInfo<'a>,
}

#[derive(Serialize)]
struct ErrorInfo<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    InvalidIndex { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    History { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_index(index: usize, shown: usize) -> Self {
        Self::InvalidIndex {
            message: MESSAGE_INVALID_PERSON_DISPLAYED_INDEX.to_string(),
            details: json!({ "index": index, "shown": shown }),
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn history(message: impl Into<String>) -> Self {
        Self::History {
            message: message.into(),
            details: json!({}),
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::InvalidIndex { .. } => "invalid_index",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::History { .. } => "history",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Internal errors mean a broken invariant rather than bad user input.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal { .. })
    }

    fn parts(&self) -> (&str, &Value) {
        match self {
            AppError::Validation { message, details }
            | AppError::InvalidIndex { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::History { message, details }
            | AppError::Internal { message, details } => (message, details),
        }
    }

    /// Renders the error as a JSON body; the shell prints internal errors this way.
    pub fn to_json(&self) -> Value {
        let (message, details) = self.parts();
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message,
                details,
            },
        };
        serde_json::to_value(body).unwrap_or_else(|_| json!({ "error": { "code": self.code() } }))
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "field": e.field() }))
    }
}

impl From<ModelError> for AppError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Duplicate(EntityKind::Person) => {
                AppError::conflict(MESSAGE_DUPLICATE_PERSON, json!({ "entity": "person" }))
            }
            ModelError::Duplicate(EntityKind::Pair) => {
                AppError::conflict(MESSAGE_DUPLICATE_PAIR, json!({ "entity": "pair" }))
            }
            ModelError::NotFound(kind) => {
                AppError::not_found(e.to_string(), json!({ "entity": kind.as_str() }))
            }
            ModelError::InvariantViolation(reason) => AppError::internal(
                "Address book invariant violated",
                json!({ "reason": reason }),
            ),
        }
    }
}

/// Maps a model error raised where the target's presence was already
/// established. A missing entity there is a broken invariant, not user error.
pub fn map_established(e: ModelError) -> AppError {
    match e {
        ModelError::NotFound(kind) => AppError::internal(
            format!("The target {} cannot be missing", kind.as_str()),
            json!({ "entity": kind.as_str() }),
        ),
        other => other.into(),
    }
}
