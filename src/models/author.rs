//! Author model and related types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Entity;

/// Author record. `books` is a back-reference set of book ids owned by the
/// book collection, kept for display and aggregation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub books: HashSet<Uuid>,
}

impl Author {
    pub fn new(dto: &CreateAuthor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: dto.name.clone(),
            books: HashSet::new(),
        }
    }
}

impl Entity for Author {
    const NAME: &'static str = "Author";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAuthor {
    #[validate(length(min = 1, message = "Author name must not be empty"))]
    pub name: String,
}
