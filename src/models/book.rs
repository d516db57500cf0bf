//! Book model and related types

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::Entity;

/// Book record. `author_id` and `genre_id` must resolve through their owning
/// collections; linking is done by the catalog service in the same
/// transaction that inserts the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    pub author_id: Uuid,
    pub genre_id: Uuid,
}

impl Book {
    pub fn new(dto: &CreateBook) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: dto.title.clone(),
            description: dto.description.clone(),
            publish_date: dto.publish_date,
            author_id: dto.author_id,
            genre_id: dto.genre_id,
        }
    }

    /// Duplicate detection is by (title, publish date, author), not by id,
    /// so a re-added book is caught even after id regeneration.
    pub fn same_edition(&self, title: &str, publish_date: NaiveDate, author_id: Uuid) -> bool {
        self.title == title && self.publish_date == publish_date && self.author_id == author_id
    }
}

impl Entity for Book {
    const NAME: &'static str = "Book";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[validate(length(min = 2, message = "Description must be at least 2 characters"))]
    pub description: String,
    #[validate(custom(function = validate_publish_date))]
    pub publish_date: NaiveDate,
    pub author_id: Uuid,
    pub genre_id: Uuid,
}

fn validate_publish_date(publish_date: &NaiveDate) -> Result<(), ValidationError> {
    if *publish_date > Utc::now().date_naive() {
        let mut error = ValidationError::new("publish_date");
        error.message = Some("Publish date must not be in the future".into());
        return Err(error);
    }
    Ok(())
}
