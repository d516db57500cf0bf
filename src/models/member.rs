//! Member model and related types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Entity;

/// Library member. `loans` is a back-reference set of loan ids; returned
/// loans stay in the set as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub loans: HashSet<Uuid>,
}

impl Member {
    pub fn new(dto: &CreateMember) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: dto.name.clone(),
            email: dto.email.clone(),
            loans: HashSet::new(),
        }
    }
}

impl Entity for Member {
    const NAME: &'static str = "Member";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 2, message = "Member name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
