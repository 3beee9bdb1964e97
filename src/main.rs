//! Interactive shell for the tutor-match address book.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! tutor> add --name Amy Bee --phone 11111111 --subject Math --role Student
//! tutor> find amy
//! tutor> undo
//! tutor> help
//! ```
//!
//! See [`tutor_match::config`] for the environment variables it reads.

use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;
use tutor_match::application::{Model, ModelManager, UndoRedoStack, dispatch};
use tutor_match::config::{self, Config};
use tutor_match::domain::AddressBook;
use tutor_match::domain::sample_data::sample_address_book;
use tutor_match::shell::{Action, ShellError, parse_line};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let mut model = ModelManager::new(initial_address_book(&config)?);
    let mut history = UndoRedoStack::with_capacity(config.undo_limit);

    println!("{}", "Tutor Match".bright_blue().bold());
    println!("Type {} for commands, {} to leave.", "help".cyan(), "exit".cyan());
    print_view(&model);

    loop {
        let line: String = Input::new()
            .with_prompt(&config.prompt)
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(Action::Exit) => break,
            Ok(Action::Run(command)) => match dispatch(command, &mut model, &mut history) {
                Ok(result) => {
                    println!("{}", result.feedback.green());
                    print_view(&model);
                }
                Err(e) if e.is_internal() => {
                    eprintln!("{} {}", "error:".red().bold(), e.to_json())
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            Err(ShellError::Usage(e)) => e.print()?,
            Err(ShellError::Invalid(e)) => println!("{}", e.to_string().yellow()),
        }
    }

    tracing::info!(book = %model.address_book(), "session ended");
    Ok(())
}

/// Installs the global subscriber; logs go to stderr so they do not mix with
/// command output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn initial_address_book(config: &Config) -> Result<AddressBook> {
    if !config.seed_sample_data {
        return Ok(AddressBook::new());
    }
    let snapshot = sample_address_book().context("Sample data is invalid")?;
    let book = AddressBook::from_snapshot(snapshot).context("Sample data is inconsistent")?;
    tracing::info!(%book, "seeded sample data");
    Ok(book)
}

fn print_view(model: &dyn Model) {
    let persons = model.filtered_persons();
    println!();
    if persons.is_empty() {
        println!("{}", "(no persons)".dimmed());
    }
    for (i, person) in persons.iter().enumerate() {
        println!("{:>3}. {}", (i + 1).to_string().bold(), person);
    }

    let pairs = model.address_book().pairs();
    if !pairs.is_empty() {
        println!("{}", "Pairs".bold());
        for pair in pairs {
            println!("     {pair}");
        }
    }
    println!();
}
