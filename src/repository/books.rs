//! Books repository (pipe-delimited text file)

use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::Book,
};

use super::{delimited, index_records, Collection};

pub struct BooksRepository {
    path: PathBuf,
    collection: Collection<Book>,
}

impl BooksRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            collection: Collection::default(),
        }
    }

    pub fn load(&mut self) -> AppResult<()> {
        let records = delimited::read_books(&self.path)?;
        self.collection.replace_all(index_records(records)?);
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        delimited::write_books(&self.path, self.collection.iter())
    }

    pub fn all(&self) -> impl Iterator<Item = &Book> {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.len() == 0
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Book> {
        self.collection.get(id)
    }

    /// Find a book by its (title, publish date, author) business key
    pub fn find_duplicate(
        &self,
        title: &str,
        publish_date: NaiveDate,
        author_id: Uuid,
    ) -> Option<&Book> {
        self.collection
            .iter()
            .find(|book| book.same_edition(title, publish_date, author_id))
    }

    pub fn add(&mut self, book: Book) -> AppResult<()> {
        self.collection.insert(book)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Book> {
        self.collection.remove(id)
    }
}
