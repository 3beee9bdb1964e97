//! Core domain entities of the tutoring address book.
//!
//! All entities are immutable values with structural equality. Changes are made
//! by building a modified copy and handing it to the
//! [`AddressBook`](crate::domain::address_book::AddressBook).
//!
//! # Entity Types
//!
//! - [`Person`] - A student or tutor
//! - [`Pair`] - A student-tutor match
//! - [`Tag`] - A categorized label attached to persons and pairs
//!
//! The validated value objects that make up a person live in [`fields`].

pub mod fields;
pub mod pair;
pub mod person;
pub mod tag;

pub use fields::{Address, Email, Level, Name, Phone, Price, Remark, Role, Status, Subject};
pub use pair::Pair;
pub use person::Person;
pub use tag::{Tag, TagCategory};
