//! Catalog management service

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    events::{Change, ChangeEvent, EntityKind, EventBus},
    models::{
        Author, Book, CreateAuthor, CreateBook, CreateGenre, CreateInventory, Genre, Inventory,
    },
    repository::Repository,
};

/// Create a new author. The name is checked case-exactly before insert.
pub fn create_author(
    repo: &mut Repository,
    events: &EventBus,
    dto: &CreateAuthor,
) -> AppResult<Author> {
    dto.validate()?;
    if repo.authors.exists_by_name(&dto.name) {
        return Err(AppError::AlreadyExists(format!(
            "Author '{}' already exists",
            dto.name
        )));
    }

    let author = Author::new(dto);
    repo.authors.add(author.clone())?;
    events.publish(ChangeEvent::new(EntityKind::Author, Change::Added, author.id));
    Ok(author)
}

/// Create a new genre. The name is checked case-exactly before insert.
pub fn create_genre(
    repo: &mut Repository,
    events: &EventBus,
    dto: &CreateGenre,
) -> AppResult<Genre> {
    dto.validate()?;
    if repo.genres.exists_by_name(&dto.name) {
        return Err(AppError::AlreadyExists(format!(
            "Genre '{}' already exists",
            dto.name
        )));
    }

    let genre = Genre::new(dto);
    repo.genres.add(genre.clone())?;
    events.publish(ChangeEvent::new(EntityKind::Genre, Change::Added, genre.id));
    Ok(genre)
}

/// Add a book together with its inventory row and the author/genre
/// back-references.
///
/// Ordered protocol: validate both DTOs, check the (title, publish date,
/// author) business key, then insert book, insert inventory, link author,
/// link genre. Any failure after the first mutation rolls every step back,
/// leaving the repositories exactly as before the call.
pub fn add_book(
    repo: &mut Repository,
    events: &EventBus,
    dto: &CreateBook,
    total_copies: u32,
    price: Decimal,
) -> AppResult<Book> {
    dto.validate()?;

    let inventory_dto = CreateInventory {
        total_copies,
        price,
    };
    inventory_dto.validate()?;

    if repo
        .books
        .find_duplicate(&dto.title, dto.publish_date, dto.author_id)
        .is_some()
    {
        return Err(AppError::AlreadyExists(format!(
            "Book '{}' already exists",
            dto.title
        )));
    }

    let book = Book::new(dto);
    let inventory = Inventory::new(book.id, &inventory_dto);
    let inventory_id = inventory.id;

    if let Err(error) = insert_book_graph(repo, &book, inventory) {
        rollback_book_graph(repo, &book);
        return Err(error);
    }

    tracing::debug!(book_id = %book.id, title = %book.title, "Book added to catalog");
    events.publish(ChangeEvent::new(EntityKind::Book, Change::Added, book.id));
    events.publish(ChangeEvent::new(EntityKind::Inventory, Change::Added, inventory_id));
    events.publish(ChangeEvent::new(EntityKind::Author, Change::Updated, book.author_id));
    events.publish(ChangeEvent::new(EntityKind::Genre, Change::Updated, book.genre_id));
    Ok(book)
}

fn insert_book_graph(repo: &mut Repository, book: &Book, inventory: Inventory) -> AppResult<()> {
    repo.books.add(book.clone())?;
    repo.inventories.add(inventory)?;
    repo.authors.add_book(book.author_id, book.id)?;
    repo.genres.add_book(book.genre_id, book.id)?;
    Ok(())
}

/// Compensating removal for a failed [`add_book`]. Every step is idempotent,
/// so the rollback is correct regardless of which inserts completed.
fn rollback_book_graph(repo: &mut Repository, book: &Book) {
    repo.books.remove(book.id);
    repo.authors.remove_book(book.author_id, book.id);
    repo.genres.remove_book(book.genre_id, book.id);
    repo.inventories.remove_by_book(book.id);
}

/// Get book by ID
pub fn get_book(repo: &Repository, id: Uuid) -> AppResult<&Book> {
    repo.books.get_by_id(id)
}

/// All books in the catalog
pub fn list_books(repo: &Repository) -> Vec<&Book> {
    repo.books.all().collect()
}

/// Inventory row for a book
pub fn inventory_for_book(repo: &Repository, book_id: Uuid) -> AppResult<&Inventory> {
    repo.inventories.get_by_book(book_id)
}
