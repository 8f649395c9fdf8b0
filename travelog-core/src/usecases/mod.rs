mod create_admin;
mod delete_travelogue;
mod error;
mod load_travelogue;
mod login;
mod messages;
mod profile;
mod query_travelogues;
mod register;
mod review_travelogue;
mod save_travelogue;
mod statistics;
mod submit_travelogue;
mod toggle_like;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_admin::*, delete_travelogue::*, error::Error, load_travelogue::*, login::*,
    messages::*, profile::*, query_travelogues::*, register::*, review_travelogue::*,
    save_travelogue::*, statistics::*, submit_travelogue::*, toggle_like::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}

use self::prelude::*;

/// Loads a travelogue that has not been deleted yet.
///
/// Deleted travelogues are treated as if they never existed.
fn get_existing_travelogue<R>(repo: &R, id: TravelId) -> Result<Travelogue>
where
    R: TravelogueRepo,
{
    let travelogue = repo.get_travelogue(id)?;
    if !travelogue.status.exists() {
        return Err(RepoError::NotFound.into());
    }
    Ok(travelogue)
}

/// Loads an existing travelogue on behalf of its author.
fn get_own_travelogue<R>(repo: &R, author: UserId, id: TravelId) -> Result<Travelogue>
where
    R: TravelogueRepo,
{
    let travelogue = get_existing_travelogue(repo, id)?;
    if !travelogue.is_authored_by(author) {
        log::debug!("User {author} is not the author of travelogue {id}");
        return Err(Error::Forbidden);
    }
    Ok(travelogue)
}
