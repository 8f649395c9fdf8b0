use super::*;

impl MessageRepo for DbReadOnly<'_> {
    fn create_message(&self, _message: &NewMessage) -> Result<MessageId> {
        unreachable!();
    }
    fn messages_of_user(&self, user: UserId, kind: Option<MessageKind>) -> Result<Vec<Message>> {
        messages_of_user(&mut self.conn.borrow_mut(), user, kind)
    }
    fn mark_message_read(&self, _user: UserId, _id: MessageId) -> Result<()> {
        unreachable!();
    }
    fn mark_all_messages_read(&self, _user: UserId) -> Result<u64> {
        unreachable!();
    }
}

impl MessageRepo for DbReadWrite<'_> {
    fn create_message(&self, message: &NewMessage) -> Result<MessageId> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn messages_of_user(&self, user: UserId, kind: Option<MessageKind>) -> Result<Vec<Message>> {
        messages_of_user(&mut self.conn.borrow_mut(), user, kind)
    }
    fn mark_message_read(&self, user: UserId, id: MessageId) -> Result<()> {
        mark_message_read(&mut self.conn.borrow_mut(), user, id)
    }
    fn mark_all_messages_read(&self, user: UserId) -> Result<u64> {
        mark_all_messages_read(&mut self.conn.borrow_mut(), user)
    }
}

impl MessageRepo for DbConnection<'_> {
    fn create_message(&self, message: &NewMessage) -> Result<MessageId> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn messages_of_user(&self, user: UserId, kind: Option<MessageKind>) -> Result<Vec<Message>> {
        messages_of_user(&mut self.conn.borrow_mut(), user, kind)
    }
    fn mark_message_read(&self, user: UserId, id: MessageId) -> Result<()> {
        mark_message_read(&mut self.conn.borrow_mut(), user, id)
    }
    fn mark_all_messages_read(&self, user: UserId) -> Result<u64> {
        mark_all_messages_read(&mut self.conn.borrow_mut(), user)
    }
}

fn create_message(conn: &mut SqliteConnection, m: &NewMessage) -> Result<MessageId> {
    let new_message = models::NewMessage {
        recipient_id: m.recipient.value(),
        kind: m.kind.as_ref(),
        title: &m.title,
        content: &m.content,
        outcome: m.outcome.as_ref().map(AsRef::as_ref),
        travelogue_id: m.travelogue.map(TravelId::value),
        from_user: m.from_user.as_deref(),
        created_at: m.created_at.as_millis(),
        is_read: false,
    };
    diesel::insert_into(schema::messages::table)
        .values(&new_message)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn load_message(entity: models::MessageEntity) -> Result<Message> {
    let models::MessageEntity {
        id,
        recipient_id,
        kind,
        title,
        content,
        outcome,
        travelogue_id,
        from_user,
        created_at,
        is_read,
    } = entity;
    let kind = kind
        .parse::<MessageKind>()
        .map_err(|err| anyhow!("Invalid message kind '{kind}': {err}"))?;
    let outcome = outcome
        .map(|o| o.parse::<ReviewOutcome>())
        .transpose()
        .map_err(|err| anyhow!("Invalid review outcome: {err}"))?;
    Ok(Message {
        id: id.into(),
        recipient: recipient_id.into(),
        kind,
        title,
        content,
        outcome,
        travelogue: travelogue_id.map(Into::into),
        from_user,
        created_at: Timestamp::from_millis(created_at),
        is_read,
    })
}

fn messages_of_user(
    conn: &mut SqliteConnection,
    user: UserId,
    kind: Option<MessageKind>,
) -> Result<Vec<Message>> {
    use schema::messages::dsl;
    let mut query = dsl::messages
        .filter(dsl::recipient_id.eq(user.value()))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .into_boxed();
    if let Some(kind) = kind {
        query = query.filter(dsl::kind.eq(kind.as_ref().to_owned()));
    }
    query
        .load::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_message)
        .collect()
}

fn mark_message_read(conn: &mut SqliteConnection, user: UserId, id: MessageId) -> Result<()> {
    use schema::messages::dsl;
    let count = diesel::update(
        dsl::messages
            .filter(dsl::id.eq(id.value()))
            .filter(dsl::recipient_id.eq(user.value())),
    )
    .set(dsl::is_read.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn mark_all_messages_read(conn: &mut SqliteConnection, user: UserId) -> Result<u64> {
    use schema::messages::dsl;
    let count = diesel::update(
        dsl::messages
            .filter(dsl::recipient_id.eq(user.value()))
            .filter(dsl::is_read.eq(false)),
    )
    .set(dsl::is_read.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(count as u64)
}
