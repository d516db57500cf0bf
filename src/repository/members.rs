//! Members repository (binary-map file)

use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::Member,
};

use super::{binary, Collection};

pub struct MembersRepository {
    path: PathBuf,
    collection: Collection<Member>,
}

impl MembersRepository {
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

    pub fn all(&self) -> impl Iterator<Item = &Member> {
        self.collection.iter()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.len() == 0
    }

    /// Get member by ID
    pub fn get_by_id(&self, id: Uuid) -> AppResult<&Member> {
        self.collection.get(id)
    }

    /// Case-exact match on the member's business key
    pub fn exists_by_email(&self, email: &str) -> bool {
        self.collection.iter().any(|member| member.email == email)
    }

    pub fn add(&mut self, member: Member) -> AppResult<()> {
        self.collection.insert(member)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Member> {
        self.collection.remove(id)
    }

    /// Link a loan into the member's back-reference set
    pub fn add_loan(&mut self, member_id: Uuid, loan_id: Uuid) -> AppResult<()> {
        self.collection.get_mut(member_id)?.loans.insert(loan_id);
        Ok(())
    }

    /// Unlink a loan; missing member or loan id is a no-op (rollback path)
    pub fn remove_loan(&mut self, member_id: Uuid, loan_id: Uuid) {
        if let Ok(member) = self.collection.get_mut(member_id) {
            member.loans.remove(&loan_id);
        }
    }
}
