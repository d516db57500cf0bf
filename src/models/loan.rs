//! Loan (borrow) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

use super::inventory::validate_price;
use super::Entity;

/// Loan lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Active,
    Returned,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Active => "ACTIVE",
            LoanStatus::Returned => "RETURNED",
        };
        write!(f, "{}", label)
    }
}

/// Loan record. `price` is copied from the book's inventory at issue time.
/// Field order matches the on-disk CSV layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub member_id: Uuid,
    pub book_id: Uuid,
    pub price: Decimal,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: LoanStatus,
}

impl Loan {
    pub fn new(member_id: Uuid, book_id: Uuid, price: Decimal, due_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            book_id,
            price,
            loan_date: Utc::now(),
            due_date,
            return_date: None,
            status: LoanStatus::Active,
        }
    }

    /// One-way ACTIVE -> RETURNED transition
    pub fn mark_returned(&mut self) -> AppResult<()> {
        if self.status == LoanStatus::Returned {
            return Err(AppError::Validation(format!(
                "Loan {} is already returned",
                self.id
            )));
        }
        self.return_date = Some(Utc::now());
        self.status = LoanStatus::Returned;
        Ok(())
    }

    pub fn is_overdue(&self) -> bool {
        self.status == LoanStatus::Active && self.due_date < Utc::now()
    }
}

impl Entity for Loan {
    const NAME: &'static str = "Loan";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Create loan request, one per book in a batch
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLoan {
    pub book_id: Uuid,
    pub member_id: Uuid,
    #[validate(custom(function = validate_due_date))]
    pub due_date: DateTime<Utc>,
    #[validate(custom(function = validate_price))]
    pub price: Decimal,
}

fn validate_due_date(due_date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *due_date <= Utc::now() {
        let mut error = ValidationError::new("due_date");
        error.message = Some("Due date must be in the future".into());
        return Err(error);
    }
    Ok(())
}
