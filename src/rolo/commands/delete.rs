use crate::book::AddressBook;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;

pub const DELETE_USAGE: &str = "Usage: delete <name>";
pub const DEL_PHONE_USAGE: &str = "Usage: del-phone <name> <index>";
pub const DEL_EMAIL_USAGE: &str = "Usage: del-email <name> <index>";

/// `delete`: remove a whole contact.
pub fn contact(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 1, DELETE_USAGE)?;
    let name = &args[0];
    book.delete(name)?;
    Ok(CmdResult::mutated()
        .with_message(CmdMessage::success(format!("Contact '{name}' deleted."))))
}

/// `del-phone`: remove the phone at an index; later entries shift down.
pub fn phone(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 2, DEL_PHONE_USAGE)?;
    let name = &args[0];
    let index = helpers::parse_index(args, &args[1])?;

    let record = book.find_mut(name)?;
    record.remove_phone(index)?;
    Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
        "Phone at index {index} removed from '{name}'."
    ))))
}

/// `del-email`: remove the email at an index.
pub fn email(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 2, DEL_EMAIL_USAGE)?;
    let name = &args[0];
    let index = helpers::parse_index(args, &args[1])?;

    let record = book.find_mut(name)?;
    record.remove_email(index)?;
    Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
        "Email at index {index} removed from '{name}'."
    ))))
}
