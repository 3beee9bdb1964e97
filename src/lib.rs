//! # Tutor Match
//!
//! An in-memory address book for matching students with tutors.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Persons, pairs, tags, uniqueness-enforcing
//!   lists and the [`AddressBook`](domain::AddressBook) aggregate that keeps the
//!   tag registry in step with its entities
//! - **Application Layer** ([`application`]) - Undoable commands, the
//!   undo/redo history and the dispatcher
//! - **Shell** ([`shell`]) - Line grammar for the interactive `tutor-match` binary
//!
//! ## Features
//!
//! - Structural uniqueness of persons and pairs
//! - Attribute-derived tags (price, subject, level, status, role)
//! - Undo/redo of every mutating command, with bounded history
//! - Filtered views addressed by one-based indices
//!
//! ## Quick Start
//!
//! ```bash
//! export LOG_FORMAT=text
//! export UNDO_LIMIT=100
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Session configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod shell;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::commands::{
        AddCommand, ClearCommand, CommandResult, DeleteCommand, DeleteTagCommand, EditCommand,
        EditPersonDescriptor, PairCommand, RemarkCommand, UndoableCommand,
    };
    pub use crate::application::{
        Command, Index, Model, ModelManager, PersonFilter, UndoRedoStack, dispatch,
    };
    pub use crate::domain::entities::{
        Address, Email, Level, Name, Pair, Person, Phone, Price, Remark, Role, Status, Subject,
        Tag, TagCategory,
    };
    pub use crate::domain::{AddressBook, AddressBookSnapshot, EntityKind, ModelError};
    pub use crate::error::AppError;
}
