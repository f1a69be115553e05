use std::fs;
use std::path::{Path, PathBuf};

use super::ContactStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// File-backed store: the whole book as one pretty-printed JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(&self.path, content).map_err(RoloError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let book = serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(book)
    }
}
