//! Repository layer: in-memory keyed collections plus their flat-file
//! persistence adapters
//!
//! Each repository is the sole writer of its collection. Loads and saves are
//! whole-collection: a load replaces the entire map, a save serializes it in
//! one pass. The [`Repository`] aggregate is constructed explicitly at
//! startup and passed to the service layer; there is no global registry.

pub mod authors;
pub mod binary;
pub mod books;
pub mod delimited;
pub mod genres;
pub mod inventories;
pub mod loans;
pub mod members;

use std::collections::HashMap;
use std::path::Path;

use uuid::Uuid;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::Entity,
};

const AUTHORS_FILE: &str = "authors.bin";
const GENRES_FILE: &str = "genres.bin";
const MEMBERS_FILE: &str = "members.bin";
const BOOKS_FILE: &str = "books.txt";
const INVENTORIES_FILE: &str = "inventories.csv";
const LOANS_FILE: &str = "loans.csv";

/// Keyed in-memory collection shared by all repositories
#[derive(Debug)]
pub(crate) struct Collection<T: Entity> {
    entries: HashMap<Uuid, T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn entries(&self) -> &HashMap<Uuid, T> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: Uuid) -> AppResult<&T> {
        self.entries
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("{} with id {} not found", T::NAME, id)))
    }

    pub fn get_mut(&mut self, id: Uuid) -> AppResult<&mut T> {
        self.entries
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("{} with id {} not found", T::NAME, id)))
    }

    /// Insert a new entity, rejecting id collisions
    pub fn insert(&mut self, entity: T) -> AppResult<()> {
        let id = entity.id();
        if self.entries.contains_key(&id) {
            return Err(AppError::DuplicateItem(format!(
                "{} with id {} already present",
                T::NAME,
                id
            )));
        }
        self.entries.insert(id, entity);
        Ok(())
    }

    /// Remove an entity; missing entries are a no-op
    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        self.entries.remove(&id)
    }

    /// Replace the whole collection (load path)
    pub fn replace_all(&mut self, entries: HashMap<Uuid, T>) {
        self.entries = entries;
    }
}

/// Build a keyed map from a record list, rejecting duplicate ids
pub(crate) fn index_records<T: Entity>(records: Vec<T>) -> AppResult<HashMap<Uuid, T>> {
    let mut entries = HashMap::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if entries.insert(id, record).is_some() {
            return Err(AppError::DataFormat(format!(
                "{} with id {} appears twice in the data file",
                T::NAME,
                id
            )));
        }
    }
    Ok(entries)
}

/// Main repository aggregate holding every entity collection
pub struct Repository {
    pub authors: authors::AuthorsRepository,
    pub genres: genres::GenresRepository,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub inventories: inventories::InventoriesRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a repository rooted at the configured data directory
    pub fn new(storage: &StorageConfig) -> Self {
        let dir: &Path = &storage.data_dir;
        Self {
            authors: authors::AuthorsRepository::new(dir.join(AUTHORS_FILE)),
            genres: genres::GenresRepository::new(dir.join(GENRES_FILE)),
            books: books::BooksRepository::new(dir.join(BOOKS_FILE)),
            members: members::MembersRepository::new(dir.join(MEMBERS_FILE)),
            inventories: inventories::InventoriesRepository::new(dir.join(INVENTORIES_FILE)),
            loans: loans::LoansRepository::new(dir.join(LOANS_FILE)),
        }
    }

    /// Load every collection from disk. A failure here is fatal to startup:
    /// the process must not continue with a partially loaded state.
    pub fn load_all(&mut self) -> AppResult<()> {
        self.authors.load()?;
        self.genres.load()?;
        self.books.load()?;
        self.members.load()?;
        self.inventories.load()?;
        self.loans.load()?;
        tracing::info!(
            authors = self.authors.len(),
            genres = self.genres.len(),
            books = self.books.len(),
            members = self.members.len(),
            inventories = self.inventories.len(),
            loans = self.loans.len(),
            "Library data loaded"
        );
        Ok(())
    }

    /// Write every collection to disk in one pass each
    pub fn save_all(&self) -> AppResult<()> {
        self.authors.save()?;
        self.genres.save()?;
        self.books.save()?;
        self.members.save()?;
        self.inventories.save()?;
        self.loans.save()?;
        tracing::info!("Library data saved");
        Ok(())
    }
}
