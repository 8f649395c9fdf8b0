use super::*;

pub fn submit_travelogue(
    connections: &sqlite::Connections,
    author: UserId,
    id: TravelId,
) -> Result<Travelogue> {
    let travelogue = connections
        .exclusive()?
        .transaction(|conn| usecases::submit_travelogue(conn, author, id))?;
    info!("Travelogue {id} submitted for review");
    Ok(travelogue)
}
