//! Routes parsed commands to the model and the session history.

use crate::application::commands::{
    AddCommand, ClearCommand, CommandResult, DeleteCommand, DeleteTagCommand, EditCommand,
    PairCommand, RemarkCommand, UndoableCommand,
};
use crate::application::history::UndoRedoStack;
use crate::application::model::{Model, PersonFilter};
use crate::error::AppError;
use tracing::{error, info, warn};

pub const MESSAGE_LIST_SUCCESS: &str = "Listed all persons";

/// Every command the shell can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Remark(RemarkCommand),
    DeleteTag(DeleteTagCommand),
    Pair(PairCommand),
    Clear(ClearCommand),
    List,
    Find(PersonFilter),
    Undo,
    Redo,
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => AddCommand::COMMAND_WORD,
            Command::Edit(_) => EditCommand::COMMAND_WORD,
            Command::Delete(_) => DeleteCommand::COMMAND_WORD,
            Command::Remark(_) => RemarkCommand::COMMAND_WORD,
            Command::DeleteTag(_) => DeleteTagCommand::COMMAND_WORD,
            Command::Pair(_) => PairCommand::COMMAND_WORD,
            Command::Clear(_) => ClearCommand::COMMAND_WORD,
            Command::List => "list",
            Command::Find(_) => "find",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }
}

/// Runs `command` against `model`, recording undoable commands in `history`.
///
/// A successful command other than undo or redo clears the redo side of the
/// history. A failed command leaves the history untouched.
///
/// # Errors
///
/// Whatever the command reports; see [`AppError`].
pub fn dispatch(
    command: Command,
    model: &mut dyn Model,
    history: &mut UndoRedoStack,
) -> Result<CommandResult, AppError> {
    let word = command.word();
    let outcome = match command {
        Command::Add(c) => run_undoable(&c, model, history),
        Command::Edit(c) => run_undoable(&c, model, history),
        Command::Delete(c) => run_undoable(&c, model, history),
        Command::Remark(c) => run_undoable(&c, model, history),
        Command::DeleteTag(c) => run_undoable(&c, model, history),
        Command::Pair(c) => run_undoable(&c, model, history),
        Command::Clear(c) => run_undoable(&c, model, history),
        Command::List => {
            model.update_person_filter(PersonFilter::All);
            history.clear_redo();
            Ok(CommandResult::new(MESSAGE_LIST_SUCCESS))
        }
        Command::Find(filter) => {
            model.update_person_filter(filter);
            history.clear_redo();
            let shown = model.filtered_persons().len();
            Ok(CommandResult::new(format!("{shown} persons listed!")))
        }
        Command::Undo => history.undo(model),
        Command::Redo => history.redo(model),
    };

    match &outcome {
        Ok(_) => info!(command = word, "command completed"),
        Err(e) if e.is_internal() => error!(command = word, error = %e, "command failed"),
        Err(e) => warn!(command = word, code = e.code(), error = %e, "command rejected"),
    }
    outcome
}

fn run_undoable<C: UndoableCommand>(
    command: &C,
    model: &mut dyn Model,
    history: &mut UndoRedoStack,
) -> Result<CommandResult, AppError> {
    let pending = command.preprocess(model)?;
    let (executed, result) = pending.execute(model)?;
    history.push(executed);
    Ok(result)
}
