//! Loans repository (CSV file)

use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Loan, LoanStatus},
};

use super::{delimited, index_records, Collection};

pub struct LoansRepository {
    path: PathBuf,
    collection: Collection<Loan>,
}

impl LoansRepository {
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

    pub fn all(&self) -> impl Iterator<Item = &Loan> {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.len() == 0
    }

    /// Get loan by ID
    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Loan> {
        self.collection.get(id)
    }

    pub(crate) fn get_by_id_mut(&mut self, id: Uuid) -> AppResult<&mut Loan> {
        self.collection.get_mut(id)
    }

    /// Loans issued to one member, returned loans included
    pub fn for_member(&self, member_id: Uuid) -> Vec<&Loan> {
        self.collection
            .iter()
            .filter(|loan| loan.member_id == member_id)
            .collect()
    }

    /// Count loans that have not been returned yet
    pub fn count_active(&self) -> usize {
        self.collection
            .iter()
            .filter(|loan| loan.status == LoanStatus::Active)
            .count()
    }

    /// Count active loans past their due date
    pub fn count_overdue(&self) -> usize {
        self.collection.iter().filter(|loan| loan.is_overdue()).count()
    }

    pub fn add(&mut self, loan: Loan) -> AppResult<()> {
        self.collection.insert(loan)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Loan> {
        self.collection.remove(id)
    }
}
