//! Application layer: the command model, undoable commands and session history.
//!
//! Commands never touch the [`AddressBook`](crate::domain::AddressBook)
//! directly; they go through the [`model::Model`] capability, which also owns
//! the displayed (filtered) person list that one-based indices refer to.
//!
//! # Modules
//!
//! - [`model`] - `Model` trait, `ModelManager` and `PersonFilter`
//! - [`commands`] - Undoable commands and their Pending/Executed/Undone states
//! - [`history`] - Per-session `UndoRedoStack`
//! - [`dispatcher`] - Routes a parsed `Command` to the model and history

pub mod commands;
pub mod dispatcher;
pub mod history;
pub mod index;
pub mod model;

pub use dispatcher::{Command, dispatch};
pub use history::UndoRedoStack;
pub use index::Index;
pub use model::{Model, ModelManager, PersonFilter};
