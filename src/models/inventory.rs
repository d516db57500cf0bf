//! Inventory model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

use super::Entity;

/// Copy counts and price for one book. Exactly one inventory record exists
/// per book; it is created together with the book and removed with it on
/// rollback. Field order matches the on-disk CSV layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: Uuid,
    pub book_id: Uuid,
    pub available_copies: u32,
    pub total_copies: u32,
    pub price: Decimal,
}

impl Inventory {
    /// A fresh inventory starts with every copy available
    pub fn new(book_id: Uuid, dto: &CreateInventory) -> Self {
        Self {
            id: Uuid::new_v4(),
            book_id,
            available_copies: dto.total_copies,
            total_copies: dto.total_copies,
            price: dto.price,
        }
    }

    /// Take one copy for a loan
    pub fn reserve_copy(&mut self) -> AppResult<()> {
        if self.available_copies == 0 {
            return Err(AppError::NoAvailableCopies(format!(
                "Book {} has no available copies",
                self.book_id
            )));
        }
        self.available_copies -= 1;
        Ok(())
    }

    /// Give one copy back (loan return or rollback); never past the total
    pub fn release_copy(&mut self) {
        self.available_copies = (self.available_copies + 1).min(self.total_copies);
    }
}

impl Entity for Inventory {
    const NAME: &'static str = "Inventory";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Create inventory request, paired with a create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInventory {
    pub total_copies: u32,
    #[validate(custom(function = validate_price))]
    pub price: Decimal,
}

pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut error = ValidationError::new("price");
        error.message = Some("Price must not be negative".into());
        return Err(error);
    }
    Ok(())
}
