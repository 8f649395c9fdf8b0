use super::*;

pub fn update_profile(
    connections: &sqlite::Connections,
    user: UserId,
    update: usecases::ProfileUpdate,
) -> Result<User> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_profile(conn, user, update))?)
}
