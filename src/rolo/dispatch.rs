//! The command dispatcher: maps a parsed command name to its handler and
//! persists the book after every successful mutation.
//!
//! There is no decorator layer; a handler either returns a [`CmdResult`]
//! or an error, and the caller matches on the error kind to render it.
//! Commands that never touch the model (hello, help, clear, quit) live in
//! the CLI, not here.

use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::commands::{self, CmdResult, Outcome};
use crate::error::{Result, RoloError};
use crate::store::ContactStore;

/// Split an input line into a lowercased command and its arguments.
/// Arguments keep their original case.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// Run one command against the book. `today` anchors birthday validation
/// and the reminder window. Unknown names fail with
/// [`RoloError::UnknownCommand`]; nothing here panics on user input.
pub fn run_command(
    book: &mut AddressBook,
    command: &str,
    args: &[String],
    today: NaiveDate,
) -> Result<CmdResult> {
    match command {
        "add" => commands::add::contact(book, args),
        "add@" | "add-email" => commands::add::email_contact(book, args),
        "add-phone" => commands::add::extra_phone(book, args),
        "change" => commands::change::run(book, args),
        "phone" => commands::show::contact_details(book, args),
        "all" => commands::show::all(book, args),
        "delete" => commands::delete::contact(book, args),
        "del-phone" => commands::delete::phone(book, args),
        "del-email" => commands::delete::email(book, args),
        "add-birthday" | "add-bd" => commands::birthday::set(book, args, today),
        "show-birthday" | "show-bd" => commands::birthday::show(book, args),
        "del-birthday" | "del-bd" => commands::birthday::remove(book, args),
        "birthdays" | "all-bd" => commands::birthday::upcoming(book, args, today),
        other => Err(RoloError::UnknownCommand {
            command: other.to_string(),
        }),
    }
}

/// [`run_command`] plus the persistence policy: only `Mutated` outcomes
/// are saved, so failed and read-only commands never touch the store.
pub fn execute<S: ContactStore>(
    store: &mut S,
    book: &mut AddressBook,
    command: &str,
    args: &[String],
    today: NaiveDate,
) -> Result<CmdResult> {
    let result = run_command(book, command, args, today)?;
    if result.outcome == Outcome::Mutated {
        store.save(book)?;
    }
    Ok(result)
}
