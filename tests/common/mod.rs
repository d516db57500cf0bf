//! Shared helpers for integration tests
#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use libris::{
    config::StorageConfig,
    events::EventBus,
    models::{Author, Book, CreateAuthor, CreateBook, CreateGenre, CreateLoan, CreateMember, Genre, Member},
    repository::Repository,
    services::{catalog, members},
};

/// Fresh data directory so tests never share files
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("libris-test-{}", Uuid::new_v4()))
}

/// Empty repository rooted at a fresh temp directory
pub fn empty_repo() -> Repository {
    Repository::new(&StorageConfig {
        data_dir: temp_data_dir(),
    })
}

pub fn create_author(repo: &mut Repository, events: &EventBus, name: &str) -> Author {
    catalog::create_author(
        repo,
        events,
        &CreateAuthor {
            name: name.to_string(),
        },
    )
    .expect("author creation failed")
}

pub fn create_genre(repo: &mut Repository, events: &EventBus, name: &str) -> Genre {
    catalog::create_genre(
        repo,
        events,
        &CreateGenre {
            name: name.to_string(),
        },
    )
    .expect("genre creation failed")
}

pub fn create_member(repo: &mut Repository, events: &EventBus, name: &str, email: &str) -> Member {
    members::create_member(
        repo,
        events,
        &CreateMember {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .expect("member creation failed")
}

pub fn book_dto(title: &str, author_id: Uuid, genre_id: Uuid) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        description: "A description".to_string(),
        publish_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        author_id,
        genre_id,
    }
}

pub fn add_book(
    repo: &mut Repository,
    events: &EventBus,
    title: &str,
    author_id: Uuid,
    genre_id: Uuid,
    total_copies: u32,
) -> Book {
    catalog::add_book(
        repo,
        events,
        &book_dto(title, author_id, genre_id),
        total_copies,
        price(),
    )
    .expect("add_book failed")
}

pub fn loan_dto(book_id: Uuid, member_id: Uuid) -> CreateLoan {
    CreateLoan {
        book_id,
        member_id,
        due_date: Utc::now() + Duration::days(14),
        price: price(),
    }
}

pub fn price() -> Decimal {
    Decimal::new(999, 2)
}
