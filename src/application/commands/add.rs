//! Adds a person.

use super::{Change, PendingCommand, UndoableCommand};
use crate::application::model::Model;
use crate::domain::entities::Person;
use crate::error::AppError;

pub const MESSAGE_SUCCESS: &str = "New person added: ";

/// Adds a person, tagged with its attribute-derived tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    /// The person's attribute tags are added to whatever tags it carries.
    pub fn new(person: Person) -> Self {
        Self {
            person: person.with_attribute_tags(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

impl UndoableCommand for AddCommand {
    const COMMAND_WORD: &'static str = "add";

    fn preprocess(&self, _model: &dyn Model) -> Result<PendingCommand, AppError> {
        Ok(PendingCommand::new(
            Self::COMMAND_WORD,
            Change::AddPerson(self.person.clone()),
            format!("{MESSAGE_SUCCESS}{}", self.person),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::fixtures::{alice, typical_model};
    use crate::domain::entities::{
        Address, Email, Level, Name, Phone, Price, Remark, Role, Status, Subject, Tag, TagCategory,
    };
    use crate::error::MESSAGE_DUPLICATE_PERSON;
    use std::collections::BTreeSet;

    fn new_math_student() -> Person {
        Person::new(
            Name::new("Amy Bee").unwrap(),
            Phone::new("11111111").unwrap(),
            Email::default(),
            Address::default(),
            Price::new("50").unwrap(),
            Subject::new("Math").unwrap(),
            Level::default(),
            Status::default(),
            Role::default(),
            BTreeSet::from([Tag::generic("husband").unwrap()]),
            Remark::default(),
        )
    }

    #[test]
    fn test_attribute_tags_are_added() {
        let command = AddCommand::new(new_math_student());
        let tags = command.person().tags();

        assert!(tags.contains(&Tag::new("Math", TagCategory::Subject).unwrap()));
        assert!(tags.contains(&Tag::new("50", TagCategory::Price).unwrap()));
        assert!(tags.contains(&Tag::generic("husband").unwrap()));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_execute_appends_person() {
        let mut model = typical_model();
        let command = AddCommand::new(new_math_student());

        let pending = command.preprocess(&model).unwrap();
        let (_, result) = pending.execute(&mut model).unwrap();

        assert!(result.feedback.starts_with("New person added: Amy Bee"));
        let persons = model.address_book().persons();
        assert_eq!(persons.len(), 4);
        assert_eq!(persons[3], *command.person());
    }

    #[test]
    fn test_execute_duplicate_fails() {
        let mut model = typical_model();
        let pending = AddCommand::new(alice()).preprocess(&model).unwrap();

        let err = pending.execute(&mut model).unwrap_err();

        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PERSON);
        assert_eq!(model.address_book().persons().len(), 3);
    }

    #[test]
    fn test_undo_removes_added_person() {
        let mut model = typical_model();
        let before = model.address_book().clone();
        let pending = AddCommand::new(new_math_student())
            .preprocess(&model)
            .unwrap();
        let (executed, _) = pending.execute(&mut model).unwrap();

        executed.undo(&mut model).unwrap();

        assert_eq!(model.address_book().persons(), before.persons());
    }
}
