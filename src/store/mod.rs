pub mod json;
pub mod outcome;

use crate::domain::search::{find_keys_by_first_name, search_by_name};
use crate::domain::{Contact, ContactBook};
use crate::errors::AppError;
use crate::helper;
use log::{debug, info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub use outcome::{AddOutcome, DeleteOutcome, SearchOutcome};

pub const DEFAULT_BOOK_PATH: &str = "contact_book.json";

/// Contact book backed by a single JSON file.
///
/// Nothing is cached: every operation reads the whole file and mutations write
/// it back in full. There is no locking, so concurrent writers race and the last
/// one wins.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        create_file_parent(&path)?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&self, contact: Contact) -> Result<AddOutcome, AppError> {
        let mut book = json::load_or_create(&self.path)?;

        let key = contact.key();
        if !book.insert(key.clone(), contact) {
            debug!("{key} already in contact book");
            return Ok(AddOutcome::Exists);
        }

        json::save(&self.path, &book)?;
        info!("added {key}");
        Ok(AddOutcome::Added)
    }

    pub fn list(&self) -> Result<ContactBook, AppError> {
        json::load(&self.path)
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome, AppError> {
        let book = json::load(&self.path)?;

        let found: Vec<Contact> = search_by_name(query, &book).into_iter().cloned().collect();

        if found.is_empty() {
            return Ok(SearchOutcome::NotFound(query.to_string()));
        }
        Ok(SearchOutcome::Found(found))
    }

    /// Removes the first contact, in book order, whose first name is exactly `first_name`.
    pub fn delete(&self, first_name: &str) -> Result<DeleteOutcome, AppError> {
        let mut book = json::load(&self.path)?;

        let matches = find_keys_by_first_name(first_name, &book).len();
        let Some((key, removed)) = book.remove_first(|c| c.first_name == first_name) else {
            return Ok(DeleteOutcome::NotFound(first_name.to_string()));
        };

        if matches > 1 {
            warn!("{matches} contacts named {first_name}, deleting {key}");
        }

        json::save(&self.path, &book)?;
        info!("deleted {key}");
        Ok(DeleteOutcome::Deleted(removed))
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
