use super::ContactStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory store for testing. Remembers the last-saved book and counts
/// saves so tests can assert the only-mutations-persist policy.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<AddressBook>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn last_saved(&self) -> Option<&AddressBook> {
        self.saved.as_ref()
    }
}

impl ContactStore for InMemoryStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(book.clone());
        self.save_count += 1;
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }
}
