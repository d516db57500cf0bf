//! Loan management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    events::{Change, ChangeEvent, EntityKind, EventBus},
    models::{CreateLoan, Loan},
    repository::Repository,
};

/// Issue a batch of loans for one member, one loan per requested book.
///
/// Every request is validated up front; nothing is mutated if any request is
/// invalid. Requests are then applied in order: reserve an inventory copy,
/// insert the loan, link it to the member. If any request fails, every loan
/// already created in this batch is reverted, so the batch either creates
/// `requests.len()` loans or leaves zero net change.
pub fn add_loans_for_member(
    repo: &mut Repository,
    events: &EventBus,
    member_id: Uuid,
    requests: &[CreateLoan],
) -> AppResult<Vec<Loan>> {
    for request in requests {
        request.validate()?;
        if request.member_id != member_id {
            return Err(AppError::Validation(format!(
                "Loan request for member {} does not match batch member {}",
                request.member_id, member_id
            )));
        }
    }

    let mut created: Vec<Loan> = Vec::new();
    for request in requests {
        match issue_loan(repo, member_id, request) {
            Ok(loan) => created.push(loan),
            Err(error) => {
                for loan in &created {
                    revert_loan(repo, loan);
                }
                tracing::debug!(member_id = %member_id, "Loan batch rolled back: {}", error);
                return Err(error);
            }
        }
    }

    for loan in &created {
        events.publish(ChangeEvent::new(EntityKind::Loan, Change::Added, loan.id));
        events.publish(ChangeEvent::new(EntityKind::Inventory, Change::Updated, loan.book_id));
    }
    if !created.is_empty() {
        events.publish(ChangeEvent::new(EntityKind::Member, Change::Updated, member_id));
    }
    Ok(created)
}

/// Issue a single loan, undoing its own partial steps on failure so the
/// batch rollback only has to revert fully created loans.
fn issue_loan(repo: &mut Repository, member_id: Uuid, request: &CreateLoan) -> AppResult<Loan> {
    repo.members.get_by_id(member_id)?;

    // The loan carries the price the inventory row holds at issue time
    let price = repo.inventories.reserve_for_book(request.book_id)?;
    let loan = Loan::new(member_id, request.book_id, price, request.due_date);

    if let Err(error) = repo.loans.add(loan.clone()) {
        repo.inventories.release_for_book(request.book_id);
        return Err(error);
    }
    if let Err(error) = repo.members.add_loan(member_id, loan.id) {
        repo.loans.remove(loan.id);
        repo.inventories.release_for_book(request.book_id);
        return Err(error);
    }

    Ok(loan)
}

/// Compensating removal for one created loan. Each revert targets a disjoint
/// loan, so batch rollback order does not matter.
fn revert_loan(repo: &mut Repository, loan: &Loan) {
    repo.inventories.release_for_book(loan.book_id);
    repo.members.remove_loan(loan.member_id, loan.id);
    repo.loans.remove(loan.id);
}

/// Return a borrowed book. The loan transitions ACTIVE -> RETURNED exactly
/// once and the inventory copy becomes available again.
pub fn return_loan(repo: &mut Repository, events: &EventBus, loan_id: Uuid) -> AppResult<Loan> {
    let loan = repo.loans.get_by_id_mut(loan_id)?;
    loan.mark_returned()?;
    let returned = loan.clone();

    repo.inventories.release_for_book(returned.book_id);

    events.publish(ChangeEvent::new(EntityKind::Loan, Change::Updated, returned.id));
    events.publish(ChangeEvent::new(EntityKind::Inventory, Change::Updated, returned.book_id));
    Ok(returned)
}

/// Loans issued to one member, returned loans included
pub fn loans_for_member(repo: &Repository, member_id: Uuid) -> AppResult<Vec<&Loan>> {
    repo.members.get_by_id(member_id)?;
    Ok(repo.loans.for_member(member_id))
}
