//! The model commands operate on: the address book plus the displayed view.

use crate::domain::address_book::{AddressBook, AddressBookSnapshot};
use crate::domain::entities::{Pair, Person, Tag};
use crate::domain::errors::ModelError;
use tracing::debug;

/// Which persons the displayed list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Any keyword equals a word of the name, ignoring case.
    NameKeywords(Vec<String>),
    /// The person carries a tag with this name (any category), ignoring case.
    TagName(String),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameKeywords(keywords) => person
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word))),
            PersonFilter::TagName(name) => person
                .tags()
                .iter()
                .any(|tag| tag.name().eq_ignore_ascii_case(name)),
        }
    }
}

/// Capability handed to commands and to the undo/redo machinery.
///
/// # Implementations
///
/// - [`ModelManager`] - In-memory implementation used by the shell
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Model {
    fn address_book(&self) -> &AddressBook;

    /// Persons currently displayed, in list order.
    fn filtered_persons(&self) -> Vec<Person>;

    fn person_filter(&self) -> PersonFilter;

    fn update_person_filter(&mut self, filter: PersonFilter);

    fn add_person(&mut self, person: Person) -> Result<(), ModelError>;

    fn insert_person(&mut self, index: usize, person: Person) -> Result<(), ModelError>;

    fn update_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError>;

    fn delete_person(&mut self, target: &Person) -> Result<(), ModelError>;

    fn add_pair(&mut self, pair: Pair) -> Result<(), ModelError>;

    fn delete_pair(&mut self, target: &Pair) -> Result<(), ModelError>;

    fn delete_tag(&mut self, tag: &Tag) -> Result<(), ModelError>;

    fn reset_data(&mut self, snapshot: AddressBookSnapshot) -> Result<(), ModelError>;
}

/// In-memory [`Model`].
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    address_book: AddressBook,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(address_book: AddressBook) -> Self {
        debug!(%address_book, "initializing model");
        Self {
            address_book,
            filter: PersonFilter::All,
        }
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn filtered_persons(&self) -> Vec<Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }

    fn person_filter(&self) -> PersonFilter {
        self.filter.clone()
    }

    fn update_person_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.address_book.add_person(person)
    }

    fn insert_person(&mut self, index: usize, person: Person) -> Result<(), ModelError> {
        self.address_book.insert_person(index, person)
    }

    fn update_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        self.address_book.update_person(target, edited)
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), ModelError> {
        self.address_book.remove_person(target)
    }

    fn add_pair(&mut self, pair: Pair) -> Result<(), ModelError> {
        self.address_book.add_pair(pair)
    }

    fn delete_pair(&mut self, target: &Pair) -> Result<(), ModelError> {
        self.address_book.remove_pair(target)
    }

    fn delete_tag(&mut self, tag: &Tag) -> Result<(), ModelError> {
        self.address_book.remove_tag(tag)
    }

    fn reset_data(&mut self, snapshot: AddressBookSnapshot) -> Result<(), ModelError> {
        self.address_book.reset_data(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Address, Email, Level, Name, Phone, Price, Remark, Role, Status, Subject,
    };
    use std::collections::BTreeSet;

    fn person(name: &str, tag: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::default(),
            Email::default(),
            Address::default(),
            Price::default(),
            Subject::default(),
            Level::default(),
            Status::default(),
            Role::default(),
            BTreeSet::from([Tag::generic(tag).unwrap()]),
            Remark::default(),
        )
    }

    fn model() -> ModelManager {
        let mut book = AddressBook::new();
        book.add_person(person("Alice Pauline", "friends")).unwrap();
        book.add_person(person("Benson Meier", "owesMoney")).unwrap();
        book.add_person(person("Carl Kurz", "friends")).unwrap();
        ModelManager::new(book)
    }

    #[test]
    fn test_default_filter_shows_all() {
        assert_eq!(model().filtered_persons().len(), 3);
    }

    #[test]
    fn test_name_keywords_filter() {
        let mut model = model();
        model.update_person_filter(PersonFilter::NameKeywords(vec!["meier".into()]));
        let shown = model.filtered_persons();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name().as_str(), "Benson Meier");
    }

    #[test]
    fn test_partial_keyword_does_not_match() {
        let filter = PersonFilter::NameKeywords(vec!["Ali".into()]);
        assert!(!filter.matches(&person("Alice Pauline", "friends")));
    }

    #[test]
    fn test_tag_filter_keeps_order() {
        let mut model = model();
        model.update_person_filter(PersonFilter::TagName("FRIENDS".into()));
        let names: Vec<_> = model
            .filtered_persons()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alice Pauline", "Carl Kurz"]);
    }
}
