use super::*;

/// Creates a new travelogue or updates an existing one.
pub fn save_travelogue(
    connections: &sqlite::Connections,
    author: UserId,
    id: Option<TravelId>,
    draft: usecases::TravelogueDraft,
) -> Result<Travelogue> {
    let travelogue = connections.exclusive()?.transaction(|conn| {
        let result = match id {
            Some(id) => usecases::update_travelogue(conn, author, id, draft),
            None => usecases::create_travelogue(conn, author, draft),
        };
        result.map_err(|err| {
            debug!("Failed to save travelogue of user {author}: {err}");
            err
        })
    })?;
    info!(
        "Saved travelogue {} ({}) of user {author}",
        travelogue.id, travelogue.status
    );
    Ok(travelogue)
}
