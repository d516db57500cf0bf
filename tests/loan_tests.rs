//! Loan service integration tests

mod common;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use libris::{
    error::AppError,
    events::EventBus,
    models::LoanStatus,
    services::loans,
};

use common::*;

#[test]
fn batch_creates_all_loans_with_decrements() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 3);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    let requests = vec![loan_dto(book.id, member.id), loan_dto(book.id, member.id)];
    let created = loans::add_loans_for_member(&mut repo, &events, member.id, &requests)
        .expect("batch should succeed");

    assert_eq!(created.len(), 2);
    assert_eq!(repo.loans.len(), 2);
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 1);

    let member = repo.members.get_by_id(member.id).unwrap();
    assert_eq!(member.loans.len(), 2);
    for loan in &created {
        assert!(member.loans.contains(&loan.id));
        assert_eq!(loan.status, LoanStatus::Active);
        assert!(loan.return_date.is_none());
    }
}

#[test]
fn loan_price_is_copied_from_inventory() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 1);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    // The request carries a different price; the inventory price wins
    let mut request = loan_dto(book.id, member.id);
    request.price = Decimal::new(100, 2);

    let created = loans::add_loans_for_member(&mut repo, &events, member.id, &[request]).unwrap();
    assert_eq!(created[0].price, price());
}

#[test]
fn batch_rolls_back_on_missing_inventory() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 3);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    let requests = vec![
        loan_dto(book.id, member.id),
        loan_dto(Uuid::new_v4(), member.id), // no inventory row for this book
    ];
    let error = loans::add_loans_for_member(&mut repo, &events, member.id, &requests)
        .expect_err("missing inventory must fail the batch");

    assert!(matches!(error, AppError::NotFound(_)));
    assert_eq!(repo.loans.len(), 0);
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 3);
    assert!(repo.members.get_by_id(member.id).unwrap().loans.is_empty());
}

#[test]
fn batch_rolls_back_for_unknown_member() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 2);

    let ghost = Uuid::new_v4();
    let error = loans::add_loans_for_member(&mut repo, &events, ghost, &[loan_dto(book.id, ghost)])
        .expect_err("unknown member must fail");

    assert!(matches!(error, AppError::NotFound(_)));
    assert_eq!(repo.loans.len(), 0);
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 2);
}

#[test]
fn exhausted_inventory_rejects_the_loan() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 1);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    loans::add_loans_for_member(&mut repo, &events, member.id, &[loan_dto(book.id, member.id)])
        .expect("first loan fits the single copy");

    let error =
        loans::add_loans_for_member(&mut repo, &events, member.id, &[loan_dto(book.id, member.id)])
            .expect_err("no copies left");

    // Availability is never driven negative
    assert!(matches!(error, AppError::NoAvailableCopies(_)));
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 0);
    assert_eq!(repo.loans.len(), 1);
}

#[test]
fn batch_validates_every_request_up_front() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 3);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    let mut stale = loan_dto(book.id, member.id);
    stale.due_date = Utc::now() - Duration::days(1);

    let requests = vec![loan_dto(book.id, member.id), stale];
    let error = loans::add_loans_for_member(&mut repo, &events, member.id, &requests)
        .expect_err("past due date must abort the whole batch");

    assert!(matches!(error, AppError::Validation(_)));
    assert_eq!(repo.loans.len(), 0);
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 3);
}

#[test]
fn batch_rejects_member_mismatch() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 1);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");
    let other = create_member(&mut repo, &events, "John Doe", "john@example.org");

    let error =
        loans::add_loans_for_member(&mut repo, &events, member.id, &[loan_dto(book.id, other.id)])
            .expect_err("request for another member must fail");

    assert!(matches!(error, AppError::Validation(_)));
    assert_eq!(repo.loans.len(), 0);
}

#[test]
fn return_releases_the_copy_once() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 2);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    let created = loans::add_loans_for_member(
        &mut repo,
        &events,
        member.id,
        &[loan_dto(book.id, member.id)],
    )
    .unwrap();
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 1);

    let returned = loans::return_loan(&mut repo, &events, created[0].id).unwrap();
    assert_eq!(returned.status, LoanStatus::Returned);
    assert!(returned.return_date.is_some());
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 2);

    // The transition is one-way; a second return changes nothing
    let error = loans::return_loan(&mut repo, &events, created[0].id)
        .expect_err("second return must fail");
    assert!(matches!(error, AppError::Validation(_)));
    assert_eq!(repo.inventories.get_by_book(book.id).unwrap().available_copies, 2);
}

#[test]
fn returned_loans_stay_in_member_history() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let author = create_author(&mut repo, &events, "A. Smith");
    let genre = create_genre(&mut repo, &events, "Fiction");
    let book = add_book(&mut repo, &events, "TT", author.id, genre.id, 1);
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    let created = loans::add_loans_for_member(
        &mut repo,
        &events,
        member.id,
        &[loan_dto(book.id, member.id)],
    )
    .unwrap();
    loans::return_loan(&mut repo, &events, created[0].id).unwrap();

    let history = loans::loans_for_member(&repo, member.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, LoanStatus::Returned);
    assert!(repo.members.get_by_id(member.id).unwrap().loans.contains(&created[0].id));
}

#[test]
fn empty_batch_is_a_successful_no_op() {
    let mut repo = empty_repo();
    let events = EventBus::new();
    let member = create_member(&mut repo, &events, "Jane Doe", "jane@example.org");

    let created = loans::add_loans_for_member(&mut repo, &events, member.id, &[]).unwrap();
    assert!(created.is_empty());
    assert_eq!(repo.loans.len(), 0);
}
