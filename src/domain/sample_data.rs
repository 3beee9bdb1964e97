//! Sample data used to seed a fresh address book.

use crate::domain::address_book::AddressBookSnapshot;
use crate::domain::entities::{
    Address, Email, Level, Name, Pair, Person, Phone, Price, Remark, Role, Status, Subject, Tag,
};
use crate::domain::errors::ValidationError;
use std::collections::BTreeSet;

struct SamplePerson {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    price: &'static str,
    subject: &'static str,
    level: &'static str,
    status: &'static str,
    role: &'static str,
    tags: &'static [&'static str],
}

const SAMPLE_PERSONS: &[SamplePerson] = &[
    SamplePerson {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        price: "50",
        subject: "Math",
        level: "Lower Sec",
        status: "Not Matched",
        role: "Student",
        tags: &["friends"],
    },
    SamplePerson {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        price: "60",
        subject: "Physics",
        level: "Upper Sec",
        status: "Not Matched",
        role: "Student",
        tags: &["colleagues", "friends"],
    },
    SamplePerson {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        price: "50",
        subject: "Math",
        level: "Lower Sec",
        status: "Not Matched",
        role: "Tutor",
        tags: &["neighbours"],
    },
    SamplePerson {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        price: "70",
        subject: "Physics",
        level: "Upper Sec",
        status: "Not Matched",
        role: "Tutor",
        tags: &["family"],
    },
    SamplePerson {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        price: "40",
        subject: "English",
        level: "Primary",
        status: "Not Matched",
        role: "Student",
        tags: &["classmates"],
    },
    SamplePerson {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        price: "45",
        subject: "English",
        level: "Primary",
        status: "Not Matched",
        role: "Tutor",
        tags: &["colleagues"],
    },
];

impl SamplePerson {
    fn build(&self) -> Result<Person, ValidationError> {
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::generic(*t))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let person = Person::new(
            Name::new(self.name)?,
            Phone::new(self.phone)?,
            Email::new(self.email)?,
            Address::new(self.address)?,
            Price::new(self.price)?,
            Subject::new(self.subject)?,
            Level::new(self.level)?,
            Status::new(self.status)?,
            Role::new(self.role)?,
            tags,
            Remark::default(),
        );
        Ok(person.with_attribute_tags())
    }
}

/// Six persons and one pair, with the registry holding every tag in use.
///
/// # Errors
///
/// Returns [`ValidationError`] only if the built-in sample values stop
/// matching the value-object formats.
pub fn sample_address_book() -> Result<AddressBookSnapshot, ValidationError> {
    let persons = SAMPLE_PERSONS
        .iter()
        .map(SamplePerson::build)
        .collect::<Result<Vec<_>, _>>()?;

    let pairs = vec![Pair::from_match(&persons[0], &persons[2])];

    let tags = persons
        .iter()
        .flat_map(|p| p.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Ok(AddressBookSnapshot {
        persons,
        pairs,
        tags,
    })
}
