use super::{get_own_travelogue, prelude::*};

/// Soft-deletes a travelogue on behalf of its author.
pub fn delete_own_travelogue<R>(repo: &R, author: UserId, id: TravelId) -> Result<()>
where
    R: TravelogueRepo,
{
    let mut travelogue = get_own_travelogue(repo, author, id)?;
    travelogue.status = travelogue.status.transition(StatusEvent::Delete)?;
    travelogue.rejection_reason = None;
    travelogue.updated_at = Timestamp::now();
    repo.update_travelogue(&travelogue)?;
    log::debug!("User {author} deleted travelogue {id}");
    Ok(())
}
