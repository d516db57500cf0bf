//! Domain models and creation DTOs

pub mod author;
pub mod book;
pub mod genre;
pub mod inventory;
pub mod loan;
pub mod member;

pub use author::{Author, CreateAuthor};
pub use book::{Book, CreateBook};
pub use genre::{CreateGenre, Genre};
pub use inventory::{CreateInventory, Inventory};
pub use loan::{CreateLoan, Loan, LoanStatus};
pub use member::{CreateMember, Member};

use uuid::Uuid;

/// Identity contract shared by every persisted entity
pub trait Entity {
    /// Display name used in error messages
    const NAME: &'static str;

    fn id(&self) -> Uuid;
}
