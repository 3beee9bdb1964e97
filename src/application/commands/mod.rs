//! Undoable commands and their execution state machine.
//!
//! A command goes through three states, each its own type:
//!
//! 1. [`PendingCommand`] - produced once by [`UndoableCommand::preprocess`],
//!    which resolves displayed indices against the model and captures the
//!    before/after values as a [`Change`]
//! 2. [`ExecutedCommand`] - the change has been applied
//! 3. [`UndoneCommand`] - the change has been reverted
//!
//! Transitions consume the previous state and take the model as a parameter,
//! so undo and redo replay the captured values instead of re-resolving
//! indices that may have shifted.

pub mod add;
pub mod clear;
pub mod delete;
pub mod delete_tag;
pub mod edit;
pub mod pair;
pub mod remark;

#[cfg(test)]
pub(crate) mod fixtures;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use delete_tag::DeleteTagCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use pair::PairCommand;
pub use remark::RemarkCommand;

use crate::application::index::Index;
use crate::application::model::{Model, PersonFilter};
use crate::domain::address_book::AddressBookSnapshot;
use crate::domain::entities::{Pair, Person, Tag};
use crate::domain::errors::ModelError;
use crate::error::{AppError, map_established};
use serde_json::json;
use tracing::{error, info};

/// Feedback shown to the user after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

/// A command that can be recorded and reversed.
pub trait UndoableCommand {
    /// Word used to invoke the command in the shell.
    const COMMAND_WORD: &'static str;

    /// Resolves the command against the current model.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIndex`] for an index outside the displayed
    /// list, or [`AppError::Validation`] for inputs that cannot be applied.
    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError>;
}

/// A resolved change to the address book, with everything needed to revert it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    AddPerson(Person),
    DeletePerson { person: Person, position: usize },
    UpdatePerson { before: Person, after: Person },
    AddPair(Pair),
    DeleteTag { tag: Tag, before: AddressBookSnapshot },
    Reset {
        before: AddressBookSnapshot,
        after: AddressBookSnapshot,
    },
}

impl Change {
    fn apply(&self, model: &mut dyn Model) -> Result<(), ModelError> {
        match self {
            Change::AddPerson(person) => model.add_person(person.clone()),
            Change::DeletePerson { person, .. } => model.delete_person(person),
            Change::UpdatePerson { before, after } => model.update_person(before, after.clone()),
            Change::AddPair(pair) => model.add_pair(pair.clone()),
            Change::DeleteTag { tag, .. } => model.delete_tag(tag),
            Change::Reset { after, .. } => model.reset_data(after.clone()),
        }
    }

    fn revert(&self, model: &mut dyn Model) -> Result<(), ModelError> {
        match self {
            Change::AddPerson(person) => model.delete_person(person),
            Change::DeletePerson { person, position } => {
                model.insert_person(*position, person.clone())
            }
            Change::UpdatePerson { before, after } => model.update_person(after, before.clone()),
            Change::AddPair(pair) => model.delete_pair(pair),
            Change::DeleteTag { before, .. } | Change::Reset { before, .. } => {
                model.reset_data(before.clone())
            }
        }
    }
}

/// Resolves `index` against the displayed person list.
pub(crate) fn resolve_person(model: &dyn Model, index: Index) -> Result<Person, AppError> {
    let shown = model.filtered_persons();
    index
        .pick(&shown)
        .cloned()
        .ok_or_else(|| AppError::invalid_index(index.one_based(), shown.len()))
}

/// Preprocessed, not yet executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommand {
    word: &'static str,
    change: Change,
    message: String,
    show_all_after: bool,
}

impl PendingCommand {
    pub fn new(word: &'static str, change: Change, message: impl Into<String>) -> Self {
        Self {
            word,
            change,
            message: message.into(),
            show_all_after: false,
        }
    }

    /// Resets the displayed list to all persons after execution.
    pub fn showing_all_after(mut self) -> Self {
        self.show_all_after = true;
        self
    }

    pub fn change(&self) -> &Change {
        &self.change
    }

    /// Applies the change.
    ///
    /// # Errors
    ///
    /// - [`AppError::Conflict`] if the result would duplicate an entity
    /// - [`AppError::Internal`] if the resolved entity has vanished
    pub fn execute(
        self,
        model: &mut dyn Model,
    ) -> Result<(ExecutedCommand, CommandResult), AppError> {
        self.change.apply(model).map_err(|e| {
            let err = map_established(e);
            if err.is_internal() {
                error!(command = self.word, error = %err, "command hit a broken invariant");
            }
            err
        })?;
        if self.show_all_after {
            model.update_person_filter(PersonFilter::All);
        }
        info!(command = self.word, "command executed");

        Ok((
            ExecutedCommand {
                word: self.word,
                change: self.change,
            },
            CommandResult::new(self.message),
        ))
    }
}

/// Applied and recorded; can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    word: &'static str,
    change: Change,
}

impl ExecutedCommand {
    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn change(&self) -> &Change {
        &self.change
    }

    /// Reverts the change and shows all persons.
    ///
    /// # Errors
    ///
    /// [`AppError::Internal`] if the model rejects the reversal; the entity was
    /// present when the command ran, so this is a broken invariant.
    pub fn undo(self, model: &mut dyn Model) -> Result<UndoneCommand, AppError> {
        self.change
            .revert(model)
            .map_err(|e| history_failure("undo", self.word, e))?;
        model.update_person_filter(PersonFilter::All);
        info!(command = self.word, "command undone");
        Ok(UndoneCommand {
            word: self.word,
            change: self.change,
        })
    }
}

/// Reverted; can be redone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoneCommand {
    word: &'static str,
    change: Change,
}

impl UndoneCommand {
    pub fn word(&self) -> &'static str {
        self.word
    }

    /// Replays the original change and shows all persons.
    ///
    /// # Errors
    ///
    /// [`AppError::Internal`] if the model rejects the replay.
    pub fn redo(self, model: &mut dyn Model) -> Result<ExecutedCommand, AppError> {
        self.change
            .apply(model)
            .map_err(|e| history_failure("redo", self.word, e))?;
        model.update_person_filter(PersonFilter::All);
        info!(command = self.word, "command redone");
        Ok(ExecutedCommand {
            word: self.word,
            change: self.change,
        })
    }
}

fn history_failure(step: &'static str, word: &'static str, e: ModelError) -> AppError {
    error!(step, command = word, error = %e, "address book diverged from recorded history");
    AppError::internal(
        format!("Cannot {step} '{word}': address book no longer matches history"),
        json!({ "reason": e.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::model::MockModel;
    use crate::domain::errors::EntityKind;
    use super::fixtures::alice;

    #[test]
    fn test_execute_maps_vanished_entity_to_internal() {
        let mut model = MockModel::new();
        model
            .expect_update_person()
            .times(1)
            .returning(|_, _| Err(ModelError::NotFound(EntityKind::Person)));
        model.expect_update_person_filter().times(0);

        let change = Change::UpdatePerson {
            before: alice(),
            after: alice().with_remark(crate::domain::entities::Remark::new("x")),
        };
        let pending = PendingCommand::new("remark", change, "ok").showing_all_after();

        let err = pending.execute(&mut model).unwrap_err();

        assert!(err.is_internal());
    }

    #[test]
    fn test_execute_maps_duplicate_to_conflict() {
        let mut model = MockModel::new();
        model
            .expect_add_person()
            .times(1)
            .returning(|_| Err(ModelError::Duplicate(EntityKind::Person)));

        let pending = PendingCommand::new("add", Change::AddPerson(alice()), "ok");
        let err = pending.execute(&mut model).unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[test]
    fn test_undo_failure_is_internal() {
        let mut model = MockModel::new();
        model.expect_add_person().times(1).returning(|_| Ok(()));
        model
            .expect_delete_person()
            .times(1)
            .returning(|_| Err(ModelError::NotFound(EntityKind::Person)));

        let pending = PendingCommand::new("add", Change::AddPerson(alice()), "ok");
        let (executed, _) = pending.execute(&mut model).unwrap();

        let err = executed.undo(&mut model).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_undo_and_redo_reset_filter() {
        let mut model = MockModel::new();
        model.expect_add_person().times(2).returning(|_| Ok(()));
        model.expect_delete_person().times(1).returning(|_| Ok(()));
        model
            .expect_update_person_filter()
            .withf(|f| *f == PersonFilter::All)
            .times(2)
            .return_const(());

        let pending = PendingCommand::new("add", Change::AddPerson(alice()), "ok");
        let (executed, result) = pending.execute(&mut model).unwrap();
        assert_eq!(result.feedback, "ok");

        let undone = executed.undo(&mut model).unwrap();
        let redone = undone.redo(&mut model).unwrap();
        assert_eq!(redone.word(), "add");
    }
}
