//! Deletes a displayed person.

use super::{Change, PendingCommand, UndoableCommand, resolve_person};
use crate::application::index::Index;
use crate::application::model::Model;
use crate::error::AppError;
use serde_json::json;

pub const MESSAGE_DELETE_PERSON_SUCCESS: &str = "Deleted Person: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl UndoableCommand for DeleteCommand {
    const COMMAND_WORD: &'static str = "delete";

    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError> {
        let person = resolve_person(model, self.index)?;
        let position = model
            .address_book()
            .position_of_person(&person)
            .ok_or_else(|| {
                AppError::internal(
                    "Displayed person is missing from the address book",
                    json!({ "index": self.index.one_based() }),
                )
            })?;
        let message = format!("{MESSAGE_DELETE_PERSON_SUCCESS}{person}");

        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::DeletePerson { person, position },
            message,
        ))
    }
}
