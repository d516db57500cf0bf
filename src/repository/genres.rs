//! Genres repository (binary-map file)

use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::Genre,
};

use super::{binary, Collection};

pub struct GenresRepository {
    path: PathBuf,
    collection: Collection<Genre>,
}

impl GenresRepository {
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

    pub fn all(&self) -> impl Iterator<Item = &Genre> {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.len() == 0
    }

    /// Get genre by ID
    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Genre> {
        self.collection.get(id)
    }

    /// Case-exact match on the genre's business key
    pub fn exists_by_name(&self, name: &str) -> bool {
        self.collection.iter().any(|genre| genre.name == name)
    }

    pub fn add(&mut self, genre: Genre) -> AppResult<()> {
        self.collection.insert(genre)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Genre> {
        self.collection.remove(id)
    }

    /// Link a book into the genre's back-reference set
    pub fn add_book(&mut self, genre_id: Uuid, book_id: Uuid) -> AppResult<()> {
        self.collection.get_mut(genre_id)?.books.insert(book_id);
        Ok(())
    }

    /// Unlink a book; missing genre or book id is a no-op (rollback path)
    pub fn remove_book(&mut self, genre_id: Uuid, book_id: Uuid) {
        if let Ok(genre) = self.collection.get_mut(genre_id) {
            genre.books.remove(&book_id);
        }
    }
}
