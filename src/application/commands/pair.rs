//! Matches a displayed student with a displayed tutor.

use super::{Change, PendingCommand, UndoableCommand, resolve_person};
use crate::application::index::Index;
use crate::application::model::Model;
use crate::domain::entities::Pair;
use crate::error::AppError;
use serde_json::json;

pub const MESSAGE_PAIR_SUCCESS: &str = "New pair added: ";
pub const MESSAGE_SAME_PERSON: &str = "A person cannot be paired with themselves.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCommand {
    student: Index,
    tutor: Index,
}

impl PairCommand {
    pub fn new(student: Index, tutor: Index) -> Self {
        Self { student, tutor }
    }
}

impl UndoableCommand for PairCommand {
    const COMMAND_WORD: &'static str = "pair";

    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError> {
        if self.student == self.tutor {
            return Err(AppError::bad_request(
                MESSAGE_SAME_PERSON,
                json!({ "index": self.student.one_based() }),
            ));
        }
        let student = resolve_person(model, self.student)?;
        let tutor = resolve_person(model, self.tutor)?;
        let pair = Pair::from_match(&student, &tutor);
        let message = format!("{MESSAGE_PAIR_SUCCESS}{pair}");

        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::AddPair(pair),
            message,
        ))
    }
}
