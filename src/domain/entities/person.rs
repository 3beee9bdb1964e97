//! Person entity: a student or tutor in the address book.

use crate::domain::entities::fields::{
    Address, Email, Level, Name, Phone, Price, Remark, Role, Status, Subject,
};
use crate::domain::entities::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An immutable person record.
///
/// Identity is structural: two persons are the same person only if every
/// field, tags included, is equal. Edits produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    price: Price,
    subject: Subject,
    level: Level,
    status: Status,
    role: Role,
    tags: BTreeSet<Tag>,
    remark: Remark,
}

impl Person {
    /// Creates a person with exactly the given tags.
    ///
    /// Attribute tags are not added here; see [`Person::with_attribute_tags`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        price: Price,
        subject: Subject,
        level: Level,
        status: Status,
        role: Role,
        tags: BTreeSet<Tag>,
        remark: Remark,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            price,
            subject,
            level,
            status,
            role,
            tags,
            remark,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Tags derived from the non-empty attribute fields.
    pub fn attribute_tags(&self) -> BTreeSet<Tag> {
        [
            self.price.tag(),
            self.subject.tag(),
            self.level.tag(),
            self.status.tag(),
            self.role.tag(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Returns a copy whose tag set also contains every attribute tag.
    pub fn with_attribute_tags(mut self) -> Self {
        let derived = self.attribute_tags();
        self.tags.extend(derived);
        self
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    /// Copy of this person without `tag`, or `None` if the tag is not present.
    pub fn without_tag(&self, tag: &Tag) -> Option<Self> {
        if !self.tags.contains(tag) {
            return None;
        }
        let mut updated = self.clone();
        updated.tags.remove(tag);
        Some(updated)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Price: {} Subject: {} Level: {} Status: {} Role: {} Remark: {} Tags: ",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.price,
            self.subject,
            self.level,
            self.status,
            self.role,
            self.remark,
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::tag::TagCategory;

    fn math_student() -> Person {
        Person::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("85355255").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6").unwrap(),
            Price::new("50").unwrap(),
            Subject::new("Math").unwrap(),
            Level::default(),
            Status::default(),
            Role::new("Student").unwrap(),
            BTreeSet::from([Tag::generic("friends").unwrap()]),
            Remark::default(),
        )
    }

    #[test]
    fn test_attribute_tags_skip_empty_fields() {
        let tags = math_student().attribute_tags();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&Tag::new("Math", TagCategory::Subject).unwrap()));
        assert!(tags.contains(&Tag::new("50", TagCategory::Price).unwrap()));
        assert!(tags.contains(&Tag::new("Student", TagCategory::Role).unwrap()));
    }

    #[test]
    fn test_with_attribute_tags_keeps_explicit_tags() {
        let person = math_student().with_attribute_tags();
        assert_eq!(person.tags().len(), 4);
        assert!(person.has_tag(&Tag::generic("friends").unwrap()));
    }

    #[test]
    fn test_structural_equality() {
        let a = math_student();
        let b = math_student();
        assert_eq!(a, b);
        assert_ne!(a, b.with_remark(Remark::new("Diligent")));
    }

    #[test]
    fn test_without_tag() {
        let person = math_student();
        let friends = Tag::generic("friends").unwrap();
        let stripped = person.without_tag(&friends).unwrap();
        assert!(!stripped.has_tag(&friends));
        assert_eq!(stripped.name(), person.name());
        assert!(stripped.without_tag(&friends).is_none());
    }

    #[test]
    fn test_display_lists_tags() {
        let rendered = math_student().to_string();
        assert!(rendered.starts_with("Alice Pauline Phone: 85355255"));
        assert!(rendered.ends_with("Tags: [friends]"));
    }
}
