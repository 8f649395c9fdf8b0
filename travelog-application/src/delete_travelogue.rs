use super::*;

pub fn delete_own_travelogue(
    connections: &sqlite::Connections,
    author: UserId,
    id: TravelId,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_own_travelogue(conn, author, id))?;
    info!("Travelogue {id} deleted by its author");
    Ok(())
}
