//! Genre model and related types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Entity;

/// Genre record with a back-reference set of book ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    pub books: HashSet<Uuid>,
}

impl Genre {
    pub fn new(dto: &CreateGenre) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: dto.name.clone(),
            books: HashSet::new(),
        }
    }
}

impl Entity for Genre {
    const NAME: &'static str = "Genre";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Create genre request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(
        min = 2,
        max = 255,
        message = "Genre name must be between 2 and 255 characters"
    ))]
    pub name: String,
}
