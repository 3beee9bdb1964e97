//! Master list of tags in use across the address book.

use crate::domain::entities::Tag;
use std::collections::BTreeSet;

/// Deduplicated set of tags, at most one per (name, category).
///
/// There is no per-tag removal: callers recompute the set of tags still in
/// use and replace the registry with [`TagRegistry::set_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: BTreeSet<Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Adds every tag not already present; existing entries are untouched.
    pub fn merge_from<'a>(&mut self, tags: impl IntoIterator<Item = &'a Tag>) {
        for tag in tags {
            if !self.tags.contains(tag) {
                self.tags.insert(tag.clone());
            }
        }
    }

    /// Pure form of [`TagRegistry::merge_from`].
    pub fn merged<'a>(&self, tags: impl IntoIterator<Item = &'a Tag>) -> Self {
        let mut next = self.clone();
        next.merge_from(tags);
        next
    }

    /// Replaces the whole registry.
    pub fn set_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.tags = tags.into_iter().collect();
    }

    /// Maps each tag to the registry's entry for the same (name, category).
    ///
    /// Tags the registry does not hold are dropped, so callers merge first.
    pub fn canonicalize<'a>(&self, tags: impl IntoIterator<Item = &'a Tag>) -> BTreeSet<Tag> {
        tags.into_iter()
            .filter_map(|tag| self.tags.get(tag).cloned())
            .collect()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_set(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TagCategory;

    fn tag(name: &str) -> Tag {
        Tag::generic(name).unwrap()
    }

    #[test]
    fn test_merge_from_is_idempotent() {
        let mut registry = TagRegistry::new();
        registry.merge_from(&[tag("friends"), tag("owesMoney")]);
        registry.merge_from(&[tag("friends")]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_merged_leaves_original_untouched() {
        let registry = TagRegistry::from_tags([tag("friends")]);
        let next = registry.merged(&[tag("colleagues")]);
        assert_eq!(registry.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_same_name_different_category_are_distinct() {
        let mut registry = TagRegistry::new();
        registry.merge_from(&[
            Tag::generic("Math").unwrap(),
            Tag::new("Math", TagCategory::Subject).unwrap(),
        ]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_set_tags_replaces_everything() {
        let mut registry = TagRegistry::from_tags([tag("a"), tag("b")]);
        registry.set_tags([tag("c")]);
        assert!(!registry.contains(&tag("a")));
        assert!(registry.contains(&tag("c")));
    }

    #[test]
    fn test_canonicalize_after_merge() {
        let incoming = [tag("friends"), tag("family")];
        let registry = TagRegistry::from_tags([tag("friends")]).merged(&incoming);
        let canonical = registry.canonicalize(&incoming);
        assert_eq!(canonical.len(), 2);
    }
}
