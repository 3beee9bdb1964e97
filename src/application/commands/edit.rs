//! Edits the details of a displayed person.

use super::{Change, PendingCommand, UndoableCommand, resolve_person};
use crate::application::index::Index;
use crate::application::model::Model;
use crate::domain::entities::{
    Address, Email, Level, Name, Person, Phone, Price, Role, Status, Subject, Tag,
};
use crate::error::AppError;
use serde_json::json;
use std::collections::BTreeSet;

pub const MESSAGE_EDIT_PERSON_SUCCESS: &str = "Edited Person: ";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Fields to overwrite. `None` keeps the current value.
///
/// `tags` replaces the person's generic tags only; attribute tags are always
/// regenerated from the edited attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub price: Option<Price>,
    pub subject: Option<Subject>,
    pub level: Option<Level>,
    pub status: Option<Status>,
    pub role: Option<Role>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.price.is_some()
            || self.subject.is_some()
            || self.level.is_some()
            || self.status.is_some()
            || self.role.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `person`.
    pub fn apply_to(&self, person: &Person) -> Person {
        let generic_tags: BTreeSet<Tag> = self
            .tags
            .as_ref()
            .unwrap_or(person.tags())
            .iter()
            .filter(|t| !t.category().is_attribute())
            .cloned()
            .collect();

        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| person.address().clone()),
            self.price.clone().unwrap_or_else(|| person.price().clone()),
            self.subject
                .clone()
                .unwrap_or_else(|| person.subject().clone()),
            self.level.clone().unwrap_or_else(|| person.level().clone()),
            self.status
                .clone()
                .unwrap_or_else(|| person.status().clone()),
            self.role.clone().unwrap_or_else(|| person.role().clone()),
            generic_tags,
            person.remark().clone(),
        )
        .with_attribute_tags()
    }
}

/// Edits the person at `index` in the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl UndoableCommand for EditCommand {
    const COMMAND_WORD: &'static str = "edit";

    fn preprocess(&self, model: &dyn Model) -> Result<PendingCommand, AppError> {
        if !self.descriptor.is_any_field_edited() {
            return Err(AppError::bad_request(
                MESSAGE_NOT_EDITED,
                json!({ "command": Self::COMMAND_WORD }),
            ));
        }
        let before = resolve_person(model, self.index)?;
        let after = self.descriptor.apply_to(&before);
        let message = format!("{MESSAGE_EDIT_PERSON_SUCCESS}{after}");

        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::UpdatePerson { before, after },
            message,
        )
        .showing_all_after())
    }
}
