//! Sets the remark of a displayed person.

use super::{Change, PendingCommand, UndoableCommand, resolve_person};
use crate::application::index::Index;
use crate::application::model::Model;
use crate::domain::entities::{Person, Remark};
use crate::error::AppError;

pub const MESSAGE_REMARK_PERSON_SUCCESS: &str = "Added Remark to";

/// Replaces the remark of the person at `index` in the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    /// Copy of `person` with only the remark replaced; attribute tags are
    /// re-added so they survive even if one was stripped earlier.
    fn with_new_remark(person: &Person, remark: &Remark) -> Person {
        person
            .clone()
            .with_remark(remark.clone())
            .with_attribute_tags()
    }
}

impl UndoableCommand for RemarkCommand {
    const COMMAND_WORD: &'static str = "remark";

    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError> {
        let before = resolve_person(model, self.index)?;
        let after = Self::with_new_remark(&before, &self.remark);
        let message = format!(
            "{MESSAGE_REMARK_PERSON_SUCCESS} {}: {}",
            after.name(),
            after.remark()
        );

        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::UpdatePerson { before, after },
            message,
        )
        .showing_all_after())
    }
}
