//! Domain layer: entities, uniqueness-enforcing lists and the address book
//! aggregate.
//!
//! Nothing here knows about commands, undo history or the terminal shell.
//!
//! # Architecture
//!
//! - [`entities`] - Person, Pair, Tag and their validated value objects
//! - [`tag_registry`] - The master set of tags in use
//! - [`unique_list`] - Ordered, duplicate-free entity lists
//! - [`address_book`] - The aggregate that owns all of the above and keeps
//!   the registry in step with entity tags
//! - [`sample_data`] - Seed data for a fresh session
//! - [`errors`] - Validation and model errors
//!
//! # Mutation boundary
//!
//! Lists and the registry are only mutated through
//! [`address_book::AddressBook`]. Each of its operations runs to completion on
//! the calling thread; a multi-threaded host must put a single lock (or an
//! owning thread) around the whole aggregate, since tag sync followed by a
//! list update is a multi-step sequence.

pub mod address_book;
pub mod entities;
pub mod errors;
pub mod sample_data;
pub mod tag_registry;
pub mod unique_list;

pub use address_book::{AddressBook, AddressBookSnapshot};
pub use errors::{EntityKind, ModelError, ValidationError};
pub use tag_registry::TagRegistry;
pub use unique_list::UniqueList;
