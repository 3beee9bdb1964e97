//! Removes a tag from every person and from the registry.

use super::{Change, PendingCommand, UndoableCommand};
use crate::application::model::Model;
use crate::domain::entities::Tag;
use crate::error::AppError;
use serde_json::json;

pub const MESSAGE_DELETE_TAG_SUCCESS: &str = "Deleted Tag: ";
pub const MESSAGE_TAG_NOT_FOUND: &str = "This tag does not exist in the address book.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagCommand {
    tag: Tag,
}

impl DeleteTagCommand {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }
}

impl UndoableCommand for DeleteTagCommand {
    const COMMAND_WORD: &'static str = "deletetag";

    /// Undo restores a snapshot taken here, since the tag may have been
    /// stripped from any number of persons.
    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError> {
        let book = model.address_book();
        if !book.tags().contains(&self.tag) {
            return Err(AppError::not_found(
                MESSAGE_TAG_NOT_FOUND,
                json!({ "tag": self.tag.name(), "category": self.tag.category().as_str() }),
            ));
        }

        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::DeleteTag {
                tag: self.tag.clone(),
                before: book.snapshot(),
            },
            format!("{MESSAGE_DELETE_TAG_SUCCESS}{}", self.tag),
        ))
    }
}
