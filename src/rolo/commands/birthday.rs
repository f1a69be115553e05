use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RoloError};

pub const ADD_BIRTHDAY_USAGE: &str = "Usage: add-birthday <name> <DD.MM.YYYY> (alias: add-bd)";
pub const SHOW_BIRTHDAY_USAGE: &str = "Usage: show-birthday <name> (alias: show-bd)";
pub const DEL_BIRTHDAY_USAGE: &str = "Usage: del-birthday <name> (alias: del-bd)";
pub const BIRTHDAYS_USAGE: &str = "Usage: birthdays [days] (alias: all-bd)";

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// `add-birthday`: set or replace a contact's birthday.
pub fn set(book: &mut AddressBook, args: &[String], today: NaiveDate) -> Result<CmdResult> {
    helpers::expect_arity(args, 2, ADD_BIRTHDAY_USAGE)?;
    let (name, raw) = (&args[0], &args[1]);

    let record = book.find_mut(name)?;
    record.set_birthday(raw, today)?;
    Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
        "Birthday {raw} saved for contact '{name}'."
    ))))
}

/// `show-birthday`: an info line; an unset birthday is a notice here,
/// not an error.
pub fn show(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 1, SHOW_BIRTHDAY_USAGE)?;
    let name = &args[0];

    let record = book.find(name)?;
    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{name}'s birthday is {birthday}.")),
        None => CmdMessage::info(format!("No birthday is set for contact '{name}'.")),
    };
    Ok(CmdResult::queried().with_message(message))
}

/// `del-birthday`: clear the stored birthday.
pub fn remove(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    helpers::expect_arity(args, 1, DEL_BIRTHDAY_USAGE)?;
    let name = &args[0];

    let record = book.find_mut(name)?;
    record.clear_birthday()?;
    Ok(CmdResult::mutated().with_message(CmdMessage::success(format!(
        "Birthday removed for contact '{name}'."
    ))))
}

/// `birthdays [days]`: the upcoming-birthdays report, default window 7.
pub fn upcoming(book: &AddressBook, args: &[String], today: NaiveDate) -> Result<CmdResult> {
    if args.len() > 1 {
        return Err(RoloError::InvalidCommand {
            usage: BIRTHDAYS_USAGE.to_string(),
        });
    }
    let days = match args.first() {
        Some(raw) => {
            let days: u32 = raw.parse().map_err(|_| RoloError::InvalidArguments {
                args: args.to_vec(),
                message: format!("'{raw}' is not a valid window; expected a positive number of days."),
            })?;
            if days == 0 {
                return Err(RoloError::InvalidArguments {
                    args: args.to_vec(),
                    message: "The number of days must be positive.".to_string(),
                });
            }
            days
        }
        None => DEFAULT_WINDOW_DAYS,
    };

    let upcoming = book.upcoming_birthdays(days, today);
    let mut result = CmdResult::queried();
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {days} days."
        )));
    }
    Ok(result.with_upcoming(upcoming))
}
