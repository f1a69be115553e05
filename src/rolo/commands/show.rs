use crate::book::AddressBook;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;

pub const PHONE_USAGE: &str = "Usage: phone <name>";
pub const ALL_USAGE: &str = "Usage: all (no arguments)";

/// `phone`: full details of one contact.
pub fn contact_details(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 1, PHONE_USAGE)?;
    let record = book.find(&args[0])?;
    Ok(CmdResult::queried().with_contacts(vec![record.clone()]))
}

/// `all`: every contact in the book, plus a count.
pub fn all(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 0, ALL_USAGE)?;

    if book.is_empty() {
        return Ok(
            CmdResult::queried().with_message(CmdMessage::warning("The address book is empty."))
        );
    }

    let contacts: Vec<_> = book.iter().cloned().collect();
    let count = contacts.len();
    Ok(CmdResult::queried()
        .with_contacts(contacts)
        .with_message(CmdMessage::info(format!("Total contacts: {count}."))))
}
