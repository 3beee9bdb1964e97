//! Empties the address book.

use super::{Change, PendingCommand, UndoableCommand};
use crate::application::model::Model;
use crate::domain::address_book::AddressBookSnapshot;
use crate::error::AppError;

pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl UndoableCommand for ClearCommand {
    const COMMAND_WORD: &'static str = "clear";

    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError> {
        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::Reset {
                before: model.address_book().snapshot(),
                after: AddressBookSnapshot::default(),
            },
            MESSAGE_SUCCESS,
        ))
    }
}
