//! Positions in the displayed person list.

use crate::domain::errors::ValidationError;
use std::fmt;

/// A list position, stored zero-based and shown to users one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError`] for `0`.
    pub fn from_one_based(index: usize) -> Result<Self, ValidationError> {
        index
            .checked_sub(1)
            .map(Self)
            .ok_or_else(|| ValidationError::new("index", "Index is not a non-zero unsigned integer."))
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }

    /// Picks the item at this position out of a displayed list.
    pub fn pick<'a, T>(&self, shown: &'a [T]) -> Option<&'a T> {
        shown.get(self.0)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_conversion() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.to_string(), "3");
        assert_eq!(Index::from_zero_based(2), index);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(Index::from_one_based(0).is_err());
    }

    #[test]
    fn test_pick() {
        let shown = ["a", "b"];
        assert_eq!(Index::from_one_based(2).unwrap().pick(&shown), Some(&"b"));
        assert_eq!(Index::from_one_based(3).unwrap().pick(&shown), None);
    }
}
