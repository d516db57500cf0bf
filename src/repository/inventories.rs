//! Inventories repository (CSV file)

use std::path::PathBuf;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Inventory,
};

use super::{delimited, index_records, Collection};

pub struct InventoriesRepository {
    path: PathBuf,
    collection: Collection<Inventory>,
}

impl InventoriesRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            collection: Collection::default(),
        }
    }

    pub fn load(&mut self) -> AppResult<()> {
        let records = delimited::read_records(&self.path)?;
        self.collection.replace_all(index_records(records)?);
        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        delimited::write_records(&self.path, self.collection.iter())
    }

    pub fn all(&self) -> impl Iterator<Item = &Inventory> {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.len() == 0
    }

    /// Get inventory by ID
    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Inventory> {
        self.collection.get(id)
    }

    /// Find the inventory row for a book; one exists per book by convention
    pub fn get_by_book(&self, book_id: Uuid) -> AppResult<&Inventory> {
        self.collection
            .iter()
            .find(|inventory| inventory.book_id == book_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Inventory for book {} not found", book_id))
            })
    }

    pub fn add(&mut self, inventory: Inventory) -> AppResult<()> {
        self.collection.insert(inventory)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Inventory> {
        self.collection.remove(id)
    }

    /// Remove the inventory row for a book (rollback path); returns the
    /// removed row if one existed
    pub fn remove_by_book(&mut self, book_id: Uuid) -> Option<Inventory> {
        let id = self
            .collection
            .iter()
            .find(|inventory| inventory.book_id == book_id)
            .map(|inventory| inventory.id)?;
        self.collection.remove(id)
    }

    /// Take one copy of the book for a loan, returning the price to copy
    /// onto the loan record
    pub fn reserve_for_book(&mut self, book_id: Uuid) -> AppResult<Decimal> {
        let inventory = self.get_by_book_mut(book_id)?;
        inventory.reserve_copy()?;
        Ok(inventory.price)
    }

    /// Give one copy of the book back; missing inventory is a no-op
    /// (rollback path)
    pub fn release_for_book(&mut self, book_id: Uuid) {
        if let Ok(inventory) = self.get_by_book_mut(book_id) {
            inventory.release_copy();
        }
    }

    fn get_by_book_mut(&mut self, book_id: Uuid) -> AppResult<&mut Inventory> {
        let id = self
            .collection
            .iter()
            .find(|inventory| inventory.book_id == book_id)
            .map(|inventory| inventory.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Inventory for book {} not found", book_id))
            })?;
        self.collection.get_mut(id)
    }
}
