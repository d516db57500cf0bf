//! Member management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    events::{Change, ChangeEvent, EntityKind, EventBus},
    models::{CreateMember, Member},
    repository::Repository,
};

/// Create a new member. Email is the business key and is checked
/// case-exactly before insert.
pub fn create_member(
    repo: &mut Repository,
    events: &EventBus,
    dto: &CreateMember,
) -> AppResult<Member> {
    dto.validate()?;
    if repo.members.exists_by_email(&dto.email) {
        return Err(AppError::AlreadyExists(format!(
            "Member with email {} already exists",
            dto.email
        )));
    }

    let member = Member::new(dto);
    repo.members.add(member.clone())?;
    events.publish(ChangeEvent::new(EntityKind::Member, Change::Added, member.id));
    Ok(member)
}

/// Get member by ID
pub fn get_member(repo: &Repository, id: Uuid) -> AppResult<&Member> {
    repo.members.get_by_id(id)
}

/// All registered members
pub fn list_members(repo: &Repository) -> Vec<&Member> {
    repo.members.all().collect()
}
