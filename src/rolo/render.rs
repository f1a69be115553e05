//! Terminal rendering for the REPL: colored messages, contact cards, the
//! birthday table, help and greetings. Nothing in here is reachable from
//! the library; the core stays I/O-free.

use chrono::{Datelike, NaiveDate, Weekday};
use colored::*;
use std::time::{SystemTime, UNIX_EPOCH};

use rolo::book::UpcomingBirthday;
use rolo::commands::{CmdMessage, CmdResult, MessageLevel};
use rolo::error::RoloError;
use rolo::model::Record;

const GREETINGS: &[&str] = &[
    "Hello! How can I help? (type '?' for the command list)",
    "Hi there! The address book is open.",
    "Welcome back! What shall we do today?",
    "At your service. Type a command to begin.",
    "Beep-boop, contact bot reporting for duty!",
    "Looking for someone? I'm ready.",
];

pub fn hello() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    let greeting = GREETINGS[nanos as usize % GREETINGS.len()];
    println!("{greeting}");
}

pub fn farewell() {
    println!("{}", "Goodbye!".green());
}

pub fn clear_screen() {
    let _ = console::Term::stdout().clear_screen();
}

pub fn print_result(result: &CmdResult, today: NaiveDate) {
    print_contacts(&result.contacts);
    if !result.upcoming.is_empty() {
        print_upcoming(&result.upcoming, today);
    }
    print_messages(&result.messages);
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.blue()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(error: &RoloError) {
    let line = error.to_string();
    match severity(error) {
        MessageLevel::Info => println!("{}", line.blue()),
        MessageLevel::Warning => println!("{}", line.yellow()),
        _ => println!("{}", line.red()),
    }
}

/// Severity drives only the color; the message text comes from the error
/// itself. Validation failures are errors, lookup misses and bad commands
/// are warnings, an unset birthday is informational.
fn severity(error: &RoloError) -> MessageLevel {
    match error {
        RoloError::InvalidContactName { .. }
        | RoloError::InvalidPhone { .. }
        | RoloError::InvalidEmail { .. }
        | RoloError::InvalidBirthday { .. }
        | RoloError::Io(_)
        | RoloError::Serialization(_) => MessageLevel::Error,
        RoloError::BirthdayNotSet { .. } => MessageLevel::Info,
        _ => MessageLevel::Warning,
    }
}

pub fn print_contacts(contacts: &[Record]) {
    for record in contacts {
        println!("{}", format!("Contact '{}':", record.name()).bold());

        if record.phones().is_empty() {
            println!("  Phones: none");
        } else {
            let phones = record
                .phones()
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{} {}", format!("[{i}]").cyan(), p))
                .collect::<Vec<_>>()
                .join("; ");
            println!("  Phones: {phones}");
        }

        if record.emails().is_empty() {
            println!("  Emails: none");
        } else {
            let emails = record
                .emails()
                .iter()
                .enumerate()
                .map(|(i, e)| format!("{} {}", format!("[{i}]").cyan(), e))
                .collect::<Vec<_>>()
                .join("; ");
            println!("  Emails: {emails}");
        }

        match record.birthday() {
            Some(birthday) => println!("  Birthday: {birthday}"),
            None => println!("  Birthday: not set"),
        }
    }
}

pub fn print_upcoming(rows: &[UpcomingBirthday], today: NaiveDate) {
    println!("{}", "Upcoming birthdays:".bold());
    for row in rows {
        let date_str = row.congratulation_date.format("%d.%m.%Y").to_string();
        let delta = (row.congratulation_date - today).num_days();
        let when = if delta == 0 {
            "today!".green().to_string()
        } else if delta == 1 {
            "tomorrow".yellow().to_string()
        } else {
            row.congratulation_date.weekday().to_string()
        };
        let note = if matches!(row.original_weekday, Weekday::Sat | Weekday::Sun) {
            format!(" (moved from {})", row.original_weekday)
                .cyan()
                .to_string()
        } else {
            String::new()
        };
        println!("  {:<20} {:<12} {}{}", row.name, date_str, when, note);
    }
}

pub fn help() {
    println!("{}", "Available commands:".bold());
    let commands_help = [
        ("hello", "Greeting (alias: hi)"),
        ("add <name> <phone>", "Add a contact with a phone, or a phone to an existing contact"),
        ("add@ <name> <email>", "Add a contact with an email, or an email to an existing contact (alias: add-email)"),
        ("add-phone <name> <phone>", "Add another phone to an existing contact"),
        ("change <name> p.<index> <phone>", "Change the phone at an index (p=phone)"),
        ("change <name> e.<index> <email>", "Change the email at an index (e=email)"),
        ("phone <name>", "Show all details of a contact"),
        ("all", "Show every contact in the book"),
        ("delete <name>", "Delete a contact"),
        ("del-phone <name> <index>", "Delete the phone at an index"),
        ("del-email <name> <index>", "Delete the email at an index"),
        ("add-birthday <name> <DD.MM.YYYY>", "Add or change a birthday (alias: add-bd)"),
        ("show-birthday <name>", "Show a birthday (alias: show-bd)"),
        ("del-birthday <name>", "Delete a birthday (alias: del-bd)"),
        ("birthdays [days]", "Birthdays in the next N days, default 7 (alias: all-bd)"),
        ("clear", "Clear the screen (alias: clr)"),
        ("?", "Show this help (alias: help)"),
        ("exit", "Quit (aliases: close, quit)"),
    ];
    let width = commands_help
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or(0);
    for (cmd, desc) in commands_help {
        // Pad before coloring so the ANSI codes don't skew the column.
        let padded = format!("{cmd:<width$}");
        println!("  {} - {desc}", padded.cyan());
    }
}
