//! Authors repository (binary-map file)

use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::Author,
};

use super::{binary, Collection};

pub struct AuthorsRepository {
    path: PathBuf,
    collection: Collection<Author>,
}

impl AuthorsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            collection: Collection::default(),
        }
    }

    pub fn load(&mut self) -> AppResult<()> {
        self.collection.replace_all(binary::read_map(&self.path)?);
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        binary::write_map(&self.path, self.collection.entries())
    }

    pub fn all(&self) -> impl Iterator<Item = &Author> {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.len() == 0
    }

    /// Get author by ID
    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Author> {
        self.collection.get(id)
    }

    /// Case-exact match on the author's business key
    pub fn exists_by_name(&self, name: &str) -> bool {
        self.collection.iter().any(|author| author.name == name)
    }

    pub fn add(&mut self, author: Author) -> AppResult<()> {
        self.collection.insert(author)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Author> {
        self.collection.remove(id)
    }

    /// Link a book into the author's back-reference set
    pub fn add_book(&mut self, author_id: Uuid, book_id: Uuid) -> AppResult<()> {
        self.collection.get_mut(author_id)?.books.insert(book_id);
        Ok(())
    }

    /// Unlink a book; missing author or book id is a no-op (rollback path)
    pub fn remove_book(&mut self, author_id: Uuid, book_id: Uuid) {
        if let Ok(author) = self.collection.get_mut(author_id) {
            author.books.remove(&book_id);
        }
    }
}
