//! Pair entity: a student matched with a tutor.

use crate::domain::entities::fields::{Level, Name, Price, Subject};
use crate::domain::entities::person::Person;
use crate::domain::entities::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A student-tutor match.
///
/// Names and attributes are copied from the persons at match time. A pair
/// holds no link back to the person list, so later edits to either person
/// are not reflected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    student_name: Name,
    tutor_name: Name,
    subject: Subject,
    level: Level,
    price: Price,
    tags: BTreeSet<Tag>,
}

impl Pair {
    pub fn new(
        student_name: Name,
        tutor_name: Name,
        subject: Subject,
        level: Level,
        price: Price,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            student_name,
            tutor_name,
            subject,
            level,
            price,
            tags,
        }
    }

    /// Matches `student` with `tutor`, taking subject, level and price from
    /// the student and tagging the pair with those attributes.
    pub fn from_match(student: &Person, tutor: &Person) -> Self {
        let subject = student.subject().clone();
        let level = student.level().clone();
        let price = student.price().clone();
        let tags = [subject.tag(), level.tag(), price.tag()]
            .into_iter()
            .flatten()
            .collect();

        Self::new(
            student.name().clone(),
            tutor.name().clone(),
            subject,
            level,
            price,
            tags,
        )
    }

    pub fn student_name(&self) -> &Name {
        &self.student_name
    }

    pub fn tutor_name(&self) -> &Name {
        &self.tutor_name
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Display name, `"<student> / <tutor>"`.
    pub fn pair_name(&self) -> String {
        format!("{} / {}", self.student_name, self.tutor_name)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} Subject: {} Level: {} Price: {} Tags: ",
            self.pair_name(),
            self.subject,
            self.level,
            self.price
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
