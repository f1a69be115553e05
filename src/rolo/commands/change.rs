use crate::book::AddressBook;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RoloError};

pub const CHANGE_USAGE: &str = "Usage: change <name> <p|e>.<index> <value>";

/// Which field list a `change` locator addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldSelector {
    Phone,
    Email,
}

/// Parse a `p.<index>` / `e.<index>` locator. An unrecognized prefix or an
/// unparsable index is a usage error, not a lookup miss.
fn parse_locator(locator: &str) -> Result<(FieldSelector, usize)> {
    let usage_error = || RoloError::InvalidCommand {
        usage: CHANGE_USAGE.to_string(),
    };
    let (prefix, index_str) = locator.split_once('.').ok_or_else(usage_error)?;
    let selector = match prefix.to_ascii_lowercase().as_str() {
        "p" => FieldSelector::Phone,
        "e" => FieldSelector::Email,
        _ => return Err(usage_error()),
    };
    let index = index_str.parse().map_err(|_| usage_error())?;
    Ok((selector, index))
}

/// `change`: replace a phone or email in place, addressed by position.
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 3, CHANGE_USAGE)?;
    let (name, locator, value) = (&args[0], &args[1], &args[2]);

    let (selector, index) = parse_locator(locator)?;
    let record = book.find_mut(name)?;

    let message = match selector {
        FieldSelector::Phone => {
            record.edit_phone(index, value)?;
            format!("Phone at index {index} for '{name}' changed to {value}.")
        }
        FieldSelector::Email => {
            record.edit_email(index, value)?;
            format!("Email at index {index} for '{name}' changed to {value}.")
        }
    };
    Ok(CmdResult::mutated().with_message(CmdMessage::success(message)))
}
