//! Core data types: validated field values and the contact [`Record`].
//!
//! Each field type is a newtype over its raw representation and can only be
//! constructed through a fallible `parse`, so a held value is always valid.
//! `Record` owns the per-contact collections and enforces the duplicate and
//! index invariants on every mutation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RoloError};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}' -]{1,50}$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[a-zA-Z]{2,}$").expect("valid email regex"));
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Identity of a [`Record`], immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Letters (any script), apostrophe, hyphen and space; 1 to 50 characters.
    pub fn parse(raw: &str) -> Result<Self> {
        if NAME_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(RoloError::InvalidContactName {
                name: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly ten decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        if PHONE_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(RoloError::InvalidPhone {
                phone: raw.to_string(),
                name: None,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address of the `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self> {
        if EMAIL_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(RoloError::InvalidEmail {
                email: raw.to_string(),
                name: None,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday. Parsed from `DD.MM.YYYY` text (two-digit day and month,
/// four-digit year) and never later than the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// `today` is injected rather than read from the clock so the
    /// future-date rule is testable.
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self> {
        let invalid = || RoloError::InvalidBirthday {
            birthday: raw.to_string(),
            name: None,
        };
        if !BIRTHDAY_RE.is_match(raw) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        if date > today {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// One contact: a validated name plus ordered phone and email lists and an
/// optional birthday.
///
/// Phones and emails are addressed by 0-based position. Positions are
/// re-derived on each listing; removing an entry shifts every later entry
/// down by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Append a phone. Duplicates (by exact string value) are rejected
    /// before validation, matching the message the user expects when they
    /// re-add a number they already stored.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        if self.phones.iter().any(|p| p.as_str() == raw) {
            return Err(RoloError::DuplicatePhone {
                name: self.name.to_string(),
                phone: raw.to_string(),
            });
        }
        let phone = Phone::parse(raw).map_err(|e| e.with_contact(self.name.as_str()))?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the phone at `index` in place; the index is preserved.
    pub fn edit_phone(&mut self, index: usize, raw: &str) -> Result<()> {
        if index >= self.phones.len() {
            return Err(RoloError::PhoneNotFound {
                name: self.name.to_string(),
                index,
            });
        }
        let phone = Phone::parse(raw).map_err(|e| e.with_contact(self.name.as_str()))?;
        self.phones[index] = phone;
        Ok(())
    }

    pub fn remove_phone(&mut self, index: usize) -> Result<()> {
        if index >= self.phones.len() {
            return Err(RoloError::PhoneNotFound {
                name: self.name.to_string(),
                index,
            });
        }
        self.phones.remove(index);
        Ok(())
    }

    pub fn add_email(&mut self, raw: &str) -> Result<()> {
        if self.emails.iter().any(|e| e.as_str() == raw) {
            return Err(RoloError::DuplicateEmail {
                name: self.name.to_string(),
                email: raw.to_string(),
            });
        }
        let email = Email::parse(raw).map_err(|e| e.with_contact(self.name.as_str()))?;
        self.emails.push(email);
        Ok(())
    }

    pub fn edit_email(&mut self, index: usize, raw: &str) -> Result<()> {
        if index >= self.emails.len() {
            return Err(RoloError::EmailNotFound {
                name: self.name.to_string(),
                index,
            });
        }
        let email = Email::parse(raw).map_err(|e| e.with_contact(self.name.as_str()))?;
        self.emails[index] = email;
        Ok(())
    }

    pub fn remove_email(&mut self, index: usize) -> Result<()> {
        if index >= self.emails.len() {
            return Err(RoloError::EmailNotFound {
                name: self.name.to_string(),
                index,
            });
        }
        self.emails.remove(index);
        Ok(())
    }

    /// Set or replace the birthday. The new value is validated before the
    /// old one is touched, so a failed replace leaves the record unchanged.
    pub fn set_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<()> {
        let birthday = Birthday::parse(raw, today).map_err(|e| e.with_contact(self.name.as_str()))?;
        self.birthday = Some(birthday);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> Result<()> {
        if self.birthday.is_none() {
            return Err(RoloError::BirthdayNotSet {
                name: self.name.to_string(),
            });
        }
        self.birthday = None;
        Ok(())
    }
}
