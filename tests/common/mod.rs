#![allow(dead_code)]

use std::collections::BTreeSet;
use tutor_match::prelude::*;

pub const DEFAULT_NAME: &str = "Alice Pauline";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "alice@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";
pub const DEFAULT_PRICE: &str = "100";
pub const DEFAULT_SUBJECT: &str = "English";
pub const DEFAULT_LEVEL: &str = "Lower Sec";
pub const DEFAULT_STATUS: &str = "Not Matched";
pub const DEFAULT_ROLE: &str = "Student";
pub const DEFAULT_TAG: &str = "Friend";
pub const DEFAULT_REMARK: &str = "Hardworking but slow learner.";

/// Builds [`Person`] values for tests. Values are validated on `build`.
#[derive(Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    price: String,
    subject: String,
    level: String,
    status: String,
    role: String,
    tags: Vec<String>,
    remark: String,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            phone: DEFAULT_PHONE.into(),
            email: DEFAULT_EMAIL.into(),
            address: DEFAULT_ADDRESS.into(),
            price: DEFAULT_PRICE.into(),
            subject: DEFAULT_SUBJECT.into(),
            level: DEFAULT_LEVEL.into(),
            status: DEFAULT_STATUS.into(),
            role: DEFAULT_ROLE.into(),
            tags: vec![DEFAULT_TAG.into()],
            remark: DEFAULT_REMARK.into(),
        }
    }
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the values of an existing person, attribute tags dropped.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            price: person.price().to_string(),
            subject: person.subject().to_string(),
            level: person.level().to_string(),
            status: person.status().to_string(),
            role: person.role().to_string(),
            tags: person
                .tags()
                .iter()
                .filter(|t| t.category() == TagCategory::Generic)
                .map(|t| t.name().to_string())
                .collect(),
            remark: person.remark().to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_price(mut self, price: &str) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_remark(mut self, remark: &str) -> Self {
        self.remark = remark.into();
        self
    }

    /// The person exactly as described, without attribute tags.
    pub fn build(self) -> Person {
        Person::new(
            Name::new(self.name).unwrap(),
            Phone::new(self.phone).unwrap(),
            Email::new(self.email).unwrap(),
            Address::new(self.address).unwrap(),
            Price::new(self.price).unwrap(),
            Subject::new(self.subject).unwrap(),
            Level::new(self.level).unwrap(),
            Status::new(self.status).unwrap(),
            Role::new(self.role).unwrap(),
            self.tags
                .into_iter()
                .map(|t| Tag::generic(t).unwrap())
                .collect::<BTreeSet<_>>(),
            Remark::new(self.remark),
        )
    }

    /// The person as a command would store it, attribute tags included.
    pub fn build_tagged(self) -> Person {
        self.build().with_attribute_tags()
    }
}

pub fn alice() -> Person {
    PersonBuilder::new()
        .with_price("50")
        .with_subject("Math")
        .with_tags(&["friends"])
        .with_remark("")
        .build_tagged()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .with_name("Benson Meier")
        .with_phone("98765432")
        .with_email("johnd@example.com")
        .with_level("Upper Sec")
        .with_tags(&["owesMoney", "friends"])
        .with_remark("")
        .build_tagged()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_price("80")
        .with_level("Upper Sec")
        .with_role("Tutor")
        .with_tags(&[])
        .with_remark("")
        .build_tagged()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl()]
}

pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        book.add_person(person).unwrap();
    }
    book
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book())
}

pub fn tag(name: &str) -> Tag {
    Tag::generic(name).unwrap()
}

/// Union of the tags carried by every person in `book`.
pub fn person_tag_union(book: &AddressBook) -> BTreeSet<Tag> {
    book.persons()
        .iter()
        .flat_map(|p| p.tags().iter().cloned())
        .collect()
}
