use crate::book::AddressBook;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub const ADD_USAGE: &str = "Usage: add <name> <phone>";
pub const ADD_EMAIL_USAGE: &str = "Usage: add@ <name> <email> (alias: add-email)";
pub const ADD_PHONE_USAGE: &str = "Usage: add-phone <name> <phone>";

/// `add`: add a phone to a contact, creating the contact if it does not
/// exist. Validation failures on either path propagate unchanged.
pub fn contact(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 2, ADD_USAGE)?;
    let (name, phone) = (&args[0], &args[1]);

    if book.contains(name) {
        let record = book.find_mut(name)?;
        record.add_phone(phone)?;
        Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
            "Phone {phone} added to contact '{name}'."
        ))))
    } else {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        book.add(record)?;
        Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
            "Contact '{name}' added to the book."
        ))))
    }
}

/// `add@` / `add-email`: the email twin of [`contact`].
pub fn email_contact(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 2, ADD_EMAIL_USAGE)?;
    let (name, email) = (&args[0], &args[1]);

    if book.contains(name) {
        let record = book.find_mut(name)?;
        record.add_email(email)?;
        Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
            "Email {email} added to contact '{name}'."
        ))))
    } else {
        let mut record = Record::new(name)?;
        record.add_email(email)?;
        book.add(record)?;
        Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
            "Contact '{name}' added to the book."
        ))))
    }
}

/// `add-phone`: append another phone to an existing contact only.
pub fn extra_phone(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 2, ADD_PHONE_USAGE)?;
    let (name, phone) = (&args[0], &args[1]);

    let record = book.find_mut(name)?;
    record.add_phone(phone)?;
    Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
        "Phone {phone} added to contact '{name}'."
    ))))
}
