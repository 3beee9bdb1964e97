//! Line grammar of the interactive shell.
//!
//! Each input line is split on whitespace and parsed with `clap`, so every
//! command gets `--help` for free. Multi-word values (names, addresses,
//! subjects) are given as consecutive words after their flag.
//!
//! ```text
//! add --name Alice Pauline --phone 85355255 --subject Math --price 50 --tag friends
//! edit 1 --level Upper Sec
//! remark 2 Needs help with algebra
//! deletetag Math --category subject
//! pair 1 3
//! find alice bob
//! find --tag friends
//! ```

use crate::application::commands::{
    AddCommand, ClearCommand, DeleteCommand, DeleteTagCommand, EditCommand, EditPersonDescriptor,
    PairCommand, RemarkCommand,
};
use crate::application::dispatcher::Command;
use crate::application::index::Index;
use crate::application::model::PersonFilter;
use crate::domain::entities::{
    Address, Email, Level, Name, Person, Phone, Price, Remark, Role, Status, Subject, Tag,
    TagCategory,
};
use crate::domain::errors::ValidationError;
use crate::error::AppError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::collections::BTreeSet;

/// What the shell should do with a parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Command),
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Bad syntax, or a `--help` request; clap renders both.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// Well-formed line with invalid values.
    #[error(transparent)]
    Invalid(#[from] AppError),
}

impl From<ValidationError> for ShellError {
    fn from(e: ValidationError) -> Self {
        ShellError::Invalid(e.into())
    }
}

#[derive(Parser)]
#[command(name = "tutor", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Add a person
    Add(PersonArgs),

    /// Edit the person at INDEX in the displayed list
    Edit {
        index: usize,
        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete the person at INDEX in the displayed list
    Delete { index: usize },

    /// Replace the remark of the person at INDEX; no text clears it
    Remark {
        index: usize,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Remove a tag from every person
    #[command(name = "deletetag")]
    DeleteTag {
        #[arg(num_args = 1.., required = true)]
        name: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = CategoryArg::Generic)]
        category: CategoryArg,
    },

    /// Pair the student at STUDENT with the tutor at TUTOR
    Pair { student: usize, tutor: usize },

    /// Remove every person, pair and tag
    Clear,

    /// Show all persons
    List,

    /// Show persons whose name contains any keyword, or who carry a tag
    Find {
        #[arg(required_unless_present = "tag", conflicts_with = "tag")]
        keywords: Vec<String>,
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Undo the last command
    Undo,

    /// Redo the last undone command
    Redo,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Args)]
struct PersonArgs {
    #[arg(short, long, num_args = 1.., required = true)]
    name: Vec<String>,
    #[arg(short, long)]
    phone: Option<String>,
    #[arg(short, long)]
    email: Option<String>,
    #[arg(short, long, num_args = 1..)]
    address: Option<Vec<String>>,
    #[arg(long)]
    price: Option<String>,
    #[arg(short, long, num_args = 1..)]
    subject: Option<Vec<String>>,
    #[arg(short, long, num_args = 1..)]
    level: Option<Vec<String>>,
    #[arg(long, num_args = 1..)]
    status: Option<Vec<String>>,
    #[arg(short, long, num_args = 1..)]
    role: Option<Vec<String>>,
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

#[derive(Args)]
struct EditArgs {
    #[arg(short, long, num_args = 1..)]
    name: Option<Vec<String>>,
    #[arg(short, long)]
    phone: Option<String>,
    #[arg(short, long)]
    email: Option<String>,
    #[arg(short, long, num_args = 1..)]
    address: Option<Vec<String>>,
    #[arg(long)]
    price: Option<String>,
    #[arg(short, long, num_args = 1..)]
    subject: Option<Vec<String>>,
    #[arg(short, long, num_args = 1..)]
    level: Option<Vec<String>>,
    #[arg(long, num_args = 1..)]
    status: Option<Vec<String>>,
    #[arg(short, long, num_args = 1..)]
    role: Option<Vec<String>>,
    /// Replace the person's tags
    #[arg(short, long = "tag")]
    tags: Option<Vec<String>>,
    /// Remove all of the person's own tags
    #[arg(long, conflicts_with = "tags")]
    clear_tags: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Price,
    Level,
    Subject,
    Status,
    Role,
    Generic,
}

impl From<CategoryArg> for TagCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Price => TagCategory::Price,
            CategoryArg::Level => TagCategory::Level,
            CategoryArg::Subject => TagCategory::Subject,
            CategoryArg::Status => TagCategory::Status,
            CategoryArg::Role => TagCategory::Role,
            CategoryArg::Generic => TagCategory::Generic,
        }
    }
}

/// Parses one shell line.
///
/// # Errors
///
/// - [`ShellError::Usage`] for bad syntax or a help request
/// - [`ShellError::Invalid`] for values that fail validation, such as an index
///   of `0` or a malformed phone number
pub fn parse_line(line: &str) -> Result<Action, ShellError> {
    let parsed = ShellLine::try_parse_from(line.split_whitespace())?;

    let command = match parsed.command {
        ShellCommand::Add(args) => Command::Add(AddCommand::new(args.into_person()?)),
        ShellCommand::Edit { index, fields } => Command::Edit(EditCommand::new(
            Index::from_one_based(index)?,
            fields.into_descriptor()?,
        )),
        ShellCommand::Delete { index } => {
            Command::Delete(DeleteCommand::new(Index::from_one_based(index)?))
        }
        ShellCommand::Remark { index, text } => Command::Remark(RemarkCommand::new(
            Index::from_one_based(index)?,
            Remark::new(text.join(" ")),
        )),
        ShellCommand::DeleteTag { name, category } => {
            Command::DeleteTag(DeleteTagCommand::new(Tag::new(name.join(" "), category.into())?))
        }
        ShellCommand::Pair { student, tutor } => Command::Pair(PairCommand::new(
            Index::from_one_based(student)?,
            Index::from_one_based(tutor)?,
        )),
        ShellCommand::Clear => Command::Clear(ClearCommand),
        ShellCommand::List => Command::List,
        ShellCommand::Find { keywords, tag } => match tag {
            Some(tag) => Command::Find(PersonFilter::TagName(tag)),
            None => Command::Find(PersonFilter::NameKeywords(keywords)),
        },
        ShellCommand::Undo => Command::Undo,
        ShellCommand::Redo => Command::Redo,
        ShellCommand::Exit => return Ok(Action::Exit),
    };

    Ok(Action::Run(command))
}

fn words(value: Option<Vec<String>>) -> String {
    value.map(|w| w.join(" ")).unwrap_or_default()
}

fn generic_tags(names: &[String]) -> Result<BTreeSet<Tag>, ValidationError> {
    names.iter().map(Tag::generic).collect()
}

impl PersonArgs {
    fn into_person(self) -> Result<Person, ValidationError> {
        Ok(Person::new(
            Name::new(self.name.join(" "))?,
            Phone::new(self.phone.unwrap_or_default())?,
            Email::new(self.email.unwrap_or_default())?,
            Address::new(words(self.address))?,
            Price::new(self.price.unwrap_or_default())?,
            Subject::new(words(self.subject))?,
            Level::new(words(self.level))?,
            Status::new(words(self.status))?,
            Role::new(words(self.role))?,
            generic_tags(&self.tags)?,
            Remark::default(),
        ))
    }
}

impl EditArgs {
    fn into_descriptor(self) -> Result<EditPersonDescriptor, ShellError> {
        let joined = |v: Option<Vec<String>>| v.map(|w| w.join(" "));
        let tags = if self.clear_tags {
            Some(BTreeSet::new())
        } else {
            self.tags.as_deref().map(generic_tags).transpose()?
        };

        let descriptor = EditPersonDescriptor {
            name: joined(self.name).map(Name::new).transpose()?,
            phone: self.phone.map(Phone::new).transpose()?,
            email: self.email.map(Email::new).transpose()?,
            address: joined(self.address).map(Address::new).transpose()?,
            price: self.price.map(Price::new).transpose()?,
            subject: joined(self.subject).map(Subject::new).transpose()?,
            level: joined(self.level).map(Level::new).transpose()?,
            status: joined(self.status).map(Status::new).transpose()?,
            role: joined(self.role).map(Role::new).transpose()?,
            tags,
        };

        if !descriptor.is_any_field_edited() {
            return Err(AppError::bad_request(
                crate::application::commands::edit::MESSAGE_NOT_EDITED,
                json!({ "command": "edit" }),
            )
            .into());
        }
        Ok(descriptor)
    }
}
