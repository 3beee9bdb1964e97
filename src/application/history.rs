//! Per-session undo/redo history.

use crate::application::commands::{CommandResult, ExecutedCommand, UndoneCommand};
use crate::application::model::Model;
use crate::error::AppError;
use std::collections::VecDeque;
use tracing::debug;

pub const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
pub const MESSAGE_REDO_SUCCESS: &str = "Redo success!";
pub const MESSAGE_UNDO_FAILURE: &str = "No more commands to undo!";
pub const MESSAGE_REDO_FAILURE: &str = "No more commands to redo!";

pub const DEFAULT_CAPACITY: usize = 100;

/// Executed commands available to undo, and undone commands available to redo.
///
/// The undo side holds at most `capacity` commands; pushing onto a full stack
/// forgets the oldest one. Pushing always clears the redo side.
#[derive(Debug, Clone)]
pub struct UndoRedoStack {
    undo: VecDeque<ExecutedCommand>,
    redo: Vec<UndoneCommand>,
    capacity: usize,
}

impl Default for UndoRedoStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl UndoRedoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            redo: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, command: ExecutedCommand) {
        self.evict_oldest_if_full();
        self.undo.push_back(command);
        self.redo.clear();
    }

    fn evict_oldest_if_full(&mut self) {
        if self.undo.len() < self.capacity {
            return;
        }
        if let Some(dropped) = self.undo.pop_front() {
            debug!(command = dropped.word(), "undo history full, oldest entry dropped");
        }
    }

    pub fn pop_undo(&mut self) -> Option<ExecutedCommand> {
        self.undo.pop_back()
    }

    pub fn pop_redo(&mut self) -> Option<UndoneCommand> {
        self.redo.pop()
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reverts the most recent command and moves it to the redo side.
    ///
    /// # Errors
    ///
    /// - [`AppError::History`] when there is nothing to undo
    /// - [`AppError::Internal`] when the model rejects the reversal; the
    ///   command is dropped from history in that case
    pub fn undo(&mut self, model: &mut dyn Model) -> Result<CommandResult, AppError> {
        let command = self
            .pop_undo()
            .ok_or_else(|| AppError::history(MESSAGE_UNDO_FAILURE))?;
        let undone = command.undo(model)?;
        self.redo.push(undone);
        Ok(CommandResult::new(MESSAGE_UNDO_SUCCESS))
    }

    /// Replays the most recently undone command and moves it back to the undo
    /// side, without clearing the remaining redo entries.
    ///
    /// # Errors
    ///
    /// - [`AppError::History`] when there is nothing to redo
    /// - [`AppError::Internal`] when the model rejects the replay
    pub fn redo(&mut self, model: &mut dyn Model) -> Result<CommandResult, AppError> {
        let command = self
            .pop_redo()
            .ok_or_else(|| AppError::history(MESSAGE_REDO_FAILURE))?;
        let executed = command.redo(model)?;
        self.evict_oldest_if_full();
        self.undo.push_back(executed);
        Ok(CommandResult::new(MESSAGE_REDO_SUCCESS))
    }
}
