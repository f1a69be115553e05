//! Command handlers: one module per command family.
//!
//! Every handler has the shape
//! `fn(&mut AddressBook, &[String]) -> Result<CmdResult>` (the birthday
//! family also takes the reference date). Handlers check arity first,
//! then drive the model, and report what happened through [`CmdResult`].
//! A failed handler is the `Err` arm carrying the precise error variant;
//! nothing is caught or rewrapped on the way up.

use crate::book::UpcomingBirthday;
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete;
pub mod helpers;
pub mod show;

/// What a successful handler did. Only `Mutated` outcomes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Mutated,
    Queried,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured result of one command: the outcome plus whatever the
/// presentation layer needs to render it.
#[derive(Debug)]
pub struct CmdResult {
    pub outcome: Outcome,
    /// Contacts to display in full (for `phone` and `all`).
    pub contacts: Vec<Record>,
    /// Rows for the `birthdays` report.
    pub upcoming: Vec<UpcomingBirthday>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn mutated() -> Self {
        Self {
            outcome: Outcome::Mutated,
            contacts: Vec::new(),
            upcoming: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn queried() -> Self {
        Self {
            outcome: Outcome::Queried,
            contacts: Vec::new(),
            upcoming: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }
}
