//! Address book aggregate: persons, pairs and the master tag registry.

use crate::domain::entities::{Pair, Person, Tag};
use crate::domain::errors::ModelError;
use crate::domain::tag_registry::TagRegistry;
use crate::domain::unique_list::UniqueList;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Read-only copy of the three lists, as loaded from or saved to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookSnapshot {
    pub persons: Vec<Person>,
    pub pairs: Vec<Pair>,
    pub tags: Vec<Tag>,
}

/// Owns the person list, the pair list and the tag registry.
///
/// Every mutation goes through these methods, which keep the registry in step
/// with the tags referenced by entities:
///
/// - adding or updating an entity merges its tags into the registry
/// - updating an entity (or removing a tag) prunes the registry down to the
///   tags used by persons; pairs do not keep a tag alive
/// - removing a person does not prune
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: UniqueList<Person>,
    pairs: UniqueList<Pair>,
    tags: TagRegistry,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address book from a snapshot.
    ///
    /// # Errors
    ///
    /// See [`AddressBook::reset_data`].
    pub fn from_snapshot(snapshot: AddressBookSnapshot) -> Result<Self, ModelError> {
        let mut book = Self::new();
        book.reset_data(snapshot)?;
        Ok(book)
    }

    // list overwrite operations

    pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<(), ModelError> {
        self.persons.set_all(persons)
    }

    pub fn set_pairs(&mut self, pairs: Vec<Pair>) -> Result<(), ModelError> {
        self.pairs.set_all(pairs)
    }

    pub fn set_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.tags.set_tags(tags);
    }

    /// Replaces all data with `snapshot`: registry first, then persons, then
    /// pairs, each entity synced against the registry.
    ///
    /// The snapshot is expected to be valid already. On failure the address
    /// book is left unchanged.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvariantViolation`] if the snapshot holds duplicates.
    pub fn reset_data(&mut self, snapshot: AddressBookSnapshot) -> Result<(), ModelError> {
        let mut next = Self::new();
        next.set_tags(snapshot.tags);

        let persons: Vec<Person> = snapshot
            .persons
            .iter()
            .map(|p| next.commit_sync_person(p))
            .collect();
        next.set_persons(persons).map_err(|_| {
            error!("snapshot contains duplicate persons");
            ModelError::InvariantViolation("address books should not have duplicate persons".into())
        })?;

        let pairs: Vec<Pair> = snapshot
            .pairs
            .iter()
            .map(|p| next.commit_sync_pair(p))
            .collect();
        next.set_pairs(pairs).map_err(|_| {
            error!("snapshot contains duplicate pairs");
            ModelError::InvariantViolation("address books should not have duplicate pairs".into())
        })?;

        debug!(
            persons = next.persons.len(),
            pairs = next.pairs.len(),
            tags = next.tags.len(),
            "address book reset"
        );
        *self = next;
        Ok(())
    }

    // person-level operations

    /// Adds a person, merging its tags into the registry.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if an equal person exists; nothing changes.
    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        let (registry, synced) = self.sync_person(&person);
        self.persons.add(synced)?;
        self.tags = registry;
        debug!(name = %person.name(), "person added");
        Ok(())
    }

    /// Inserts a person at `index` (clamped), merging its tags.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if an equal person exists; nothing changes.
    pub fn insert_person(&mut self, index: usize, person: Person) -> Result<(), ModelError> {
        let (registry, synced) = self.sync_person(&person);
        self.persons.insert(index, synced)?;
        self.tags = registry;
        debug!(name = %person.name(), index, "person inserted");
        Ok(())
    }

    /// Replaces `target` with `edited`, then prunes the registry to the tags
    /// used by persons.
    ///
    /// The merged tags are committed to the registry before the list is
    /// touched, so a rejected replacement can leave extra tags behind.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFound`] if `target` is absent
    /// - [`ModelError::Duplicate`] if `edited` equals another person
    pub fn update_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let synced = self.commit_sync_person(&edited);
        self.persons.set_entity(target, synced)?;
        self.remove_unused_tags();
        debug!(name = %edited.name(), "person updated");
        Ok(())
    }

    /// Removes `person`. The registry is not pruned.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotFound`] if absent.
    pub fn remove_person(&mut self, person: &Person) -> Result<(), ModelError> {
        self.persons.remove(person)?;
        debug!(name = %person.name(), "person removed");
        Ok(())
    }

    // pair-level operations

    /// Adds a pair, merging its tags into the registry.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if an equal pair exists; nothing changes.
    pub fn add_pair(&mut self, pair: Pair) -> Result<(), ModelError> {
        let (registry, synced) = self.sync_pair(&pair);
        self.pairs.add(synced)?;
        self.tags = registry;
        debug!(pair = %pair.pair_name(), "pair added");
        Ok(())
    }

    /// Replaces `target` with `edited`, then prunes the registry to the tags
    /// used by persons.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFound`] if `target` is absent
    /// - [`ModelError::Duplicate`] if `edited` equals another pair
    pub fn update_pair(&mut self, target: &Pair, edited: Pair) -> Result<(), ModelError> {
        let synced = self.commit_sync_pair(&edited);
        self.pairs.set_entity(target, synced)?;
        self.remove_unused_tags();
        debug!(pair = %edited.pair_name(), "pair updated");
        Ok(())
    }

    /// Removes `pair`. The registry is not pruned.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotFound`] if absent.
    pub fn remove_pair(&mut self, pair: &Pair) -> Result<(), ModelError> {
        self.pairs.remove(pair)?;
        debug!(pair = %pair.pair_name(), "pair removed");
        Ok(())
    }

    // tag-level operations

    /// Strips `tag` from every person carrying it, through
    /// [`AddressBook::update_person`]. Persons without the tag are untouched.
    /// Afterwards the registry no longer holds `tag`.
    ///
    /// Runs on a working copy and commits only if every update succeeds.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if stripping the tag makes a person equal to
    /// another one.
    pub fn remove_tag(&mut self, tag: &Tag) -> Result<(), ModelError> {
        let mut next = self.clone();
        let mut touched = 0usize;
        for person in self.persons.iter() {
            if let Some(updated) = person.without_tag(tag) {
                next.update_person(person, updated)?;
                touched += 1;
            }
        }
        if next.tags.contains(tag) {
            let remaining: Vec<Tag> = next.tags.iter().filter(|t| *t != tag).cloned().collect();
            next.tags.set_tags(remaining);
        }
        debug!(%tag, persons = touched, "tag removed");
        *self = next;
        Ok(())
    }

    // tag sync

    /// Merges the person's tags into a copy of the registry and rebuilds the
    /// person's tags from that registry. Nothing is mutated.
    fn sync_person(&self, person: &Person) -> (TagRegistry, Person) {
        let registry = self.tags.merged(person.tags());
        let tags = registry.canonicalize(person.tags());
        (registry, person.clone().with_tags(tags))
    }

    fn sync_pair(&self, pair: &Pair) -> (TagRegistry, Pair) {
        let registry = self.tags.merged(pair.tags());
        let tags = registry.canonicalize(pair.tags());
        (registry, pair.clone().with_tags(tags))
    }

    /// Syncs and keeps the merged registry regardless of what happens next.
    fn commit_sync_person(&mut self, person: &Person) -> Person {
        let (registry, synced) = self.sync_person(person);
        self.tags = registry;
        synced
    }

    fn commit_sync_pair(&mut self, pair: &Pair) -> Pair {
        let (registry, synced) = self.sync_pair(pair);
        self.tags = registry;
        synced
    }

    /// Replaces the registry with the union of tags used by persons.
    fn remove_unused_tags(&mut self) {
        let in_use: Vec<Tag> = self
            .persons
            .iter()
            .flat_map(|p| p.tags().iter().cloned())
            .collect();
        self.tags.set_tags(in_use);
    }

    // views

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn pairs(&self) -> &[Pair] {
        self.pairs.as_slice()
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn position_of_person(&self, person: &Person) -> Option<usize> {
        self.persons.position(person)
    }

    pub fn snapshot(&self) -> AddressBookSnapshot {
        AddressBookSnapshot {
            persons: self.persons.as_slice().to_vec(),
            pairs: self.pairs.as_slice().to_vec(),
            tags: self.tags.iter().cloned().collect(),
        }
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} persons, {} pairs, {} tags",
            self.persons.len(),
            self.pairs.len(),
            self.tags.len()
        )
    }
}
