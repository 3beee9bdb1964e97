//! Typical persons shared by the command tests.

use crate::application::model::ModelManager;
use crate::domain::address_book::AddressBook;
use crate::domain::entities::{
    Address, Email, Level, Name, Person, Phone, Price, Remark, Role, Status, Subject, Tag,
};
use std::collections::BTreeSet;

#[allow(clippy::too_many_arguments)]
fn build(
    name: &str,
    phone: &str,
    email: &str,
    price: &str,
    subject: &str,
    level: &str,
    role: &str,
    tags: &[&str],
) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        Price::new(price).unwrap(),
        Subject::new(subject).unwrap(),
        Level::new(level).unwrap(),
        Status::new("Not Matched").unwrap(),
        Role::new(role).unwrap(),
        tags.iter()
            .map(|t| Tag::generic(*t).unwrap())
            .collect::<BTreeSet<_>>(),
        Remark::default(),
    )
    .with_attribute_tags()
}

pub fn alice() -> Person {
    build(
        "Alice Pauline",
        "85355255",
        "alice@example.com",
        "50",
        "Math",
        "Lower Sec",
        "Student",
        &["friends"],
    )
}

pub fn benson() -> Person {
    build(
        "Benson Meier",
        "98765432",
        "johnd@example.com",
        "150",
        "English",
        "Upper Sec",
        "Student",
        &["owesMoney", "friends"],
    )
}

pub fn carl() -> Person {
    build(
        "Carl Kurz",
        "95352563",
        "heinz@example.com",
        "80",
        "English",
        "Upper Sec",
        "Tutor",
        &[],
    )
}

pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in [alice(), benson(), carl()] {
        book.add_person(person).unwrap();
    }
    book
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book())
}
