use super::{get_existing_travelogue, prelude::*};

pub fn toggle_like<R>(repo: &R, user: UserId, id: TravelId) -> Result<LikeToggled>
where
    R: TravelogueRepo + LikeRepo,
{
    let travelogue = get_existing_travelogue(repo, id)?;
    if !travelogue.status.is_visible_to_public() {
        return Err(Error::NotLikeable);
    }
    let toggled = repo.toggle_like(user, id)?;
    log::debug!(
        "User {user} {} travelogue {id}",
        if toggled.liked { "liked" } else { "unliked" }
    );
    Ok(toggled)
}
