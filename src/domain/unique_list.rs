//! Ordered list that refuses structurally equal entries.

use crate::domain::entities::{Pair, Person};
use crate::domain::errors::{EntityKind, ModelError};

/// An entity type stored in a [`UniqueList`].
pub trait Entity: Clone + PartialEq {
    /// Reported in duplicate / not-found errors.
    const KIND: EntityKind;
}

impl Entity for Person {
    const KIND: EntityKind = EntityKind::Person;
}

impl Entity for Pair {
    const KIND: EntityKind = EntityKind::Pair;
}

/// Insertion-ordered collection without duplicates.
///
/// Equality is order-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Appends `item`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if an equal item is already present.
    pub fn add(&mut self, item: T) -> Result<(), ModelError> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// Inserts `item` at `index`, clamped to the current length.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if an equal item is already present.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ModelError> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        Ok(())
    }

    /// Replaces `target` with `replacement`, keeping its position.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFound`] if `target` is absent
    /// - [`ModelError::Duplicate`] if `replacement` equals a different entry
    pub fn set_entity(&mut self, target: &T, replacement: T) -> Result<(), ModelError> {
        let index = self.position(target).ok_or(ModelError::NotFound(T::KIND))?;
        if target != &replacement && self.contains(&replacement) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items[index] = replacement;
        Ok(())
    }

    /// Removes `item`.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotFound`] if absent.
    pub fn remove(&mut self, item: &T) -> Result<(), ModelError> {
        let index = self.position(item).ok_or(ModelError::NotFound(T::KIND))?;
        self.items.remove(index);
        Ok(())
    }

    /// Replaces the whole list, all or nothing.
    ///
    /// # Errors
    ///
    /// [`ModelError::Duplicate`] if `items` contains duplicates among itself.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), ModelError> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                return Err(ModelError::Duplicate(T::KIND));
            }
        }
        self.items = items;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
