use super::*;

pub fn mark_message_read(
    connections: &sqlite::Connections,
    user: UserId,
    id: MessageId,
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::mark_message_read(conn, user, id))?)
}

pub fn mark_all_messages_read(connections: &sqlite::Connections, user: UserId) -> Result<u64> {
    let count = connections
        .exclusive()?
        .transaction(|conn| usecases::mark_all_messages_read(conn, user))?;
    debug!("Marked {count} messages of user {user} as read");
    Ok(count)
}
