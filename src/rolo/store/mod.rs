//! Storage abstraction for the address book.
//!
//! The [`ContactStore`] trait keeps the command layer decoupled from
//! persistence details and lets tests run against [`memory::InMemoryStore`]
//! instead of the filesystem. Production uses [`fs::FileStore`], one JSON
//! document per book.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait ContactStore {
    /// Durably write the whole book.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Reconstruct the book. A missing backing file yields an empty book;
    /// unreadable or corrupt content is an error the caller may choose to
    /// recover from (the REPL logs it and starts empty).
    fn load(&self) -> Result<AddressBook>;
}
