use super::prelude::*;

pub fn review_message(travelogue: &Travelogue, record: &ReviewRecord) -> NewMessage {
    let (outcome, title, content) = match record.action {
        ReviewAction::Reject => (
            ReviewOutcome::Rejected,
            "Travelogue rejected".to_owned(),
            format!(
                "Your travelogue \"{}\" was rejected: {}",
                travelogue.title,
                record.rejection_reason.as_deref().unwrap_or_default()
            ),
        ),
        _ => (
            ReviewOutcome::Approved,
            "Travelogue published".to_owned(),
            format!("Your travelogue \"{}\" has been published", travelogue.title),
        ),
    };
    NewMessage {
        recipient: travelogue.author,
        kind: MessageKind::Review,
        title,
        content,
        outcome: Some(outcome),
        travelogue: Some(travelogue.id),
        from_user: None,
        created_at: record.review_time,
    }
}

/// `None` if users like their own travelogue.
pub fn like_message(travelogue: &Travelogue, liked_by: &User) -> Option<NewMessage> {
    if travelogue.is_authored_by(liked_by.id) {
        return None;
    }
    Some(NewMessage {
        recipient: travelogue.author,
        kind: MessageKind::Like,
        title: "New like".to_owned(),
        content: format!("{} liked \"{}\"", liked_by.nickname, travelogue.title),
        outcome: None,
        travelogue: Some(travelogue.id),
        from_user: Some(liked_by.nickname.clone()),
        created_at: Timestamp::now(),
    })
}

pub fn send_message<R: MessageRepo>(repo: &R, message: &NewMessage) -> Result<MessageId> {
    Ok(repo.create_message(message)?)
}

pub fn list_messages<R: MessageRepo>(
    repo: &R,
    user: UserId,
    kind: Option<MessageKind>,
) -> Result<Vec<Message>> {
    Ok(repo.messages_of_user(user, kind)?)
}

pub fn mark_message_read<R: MessageRepo>(repo: &R, user: UserId, id: MessageId) -> Result<()> {
    Ok(repo.mark_message_read(user, id)?)
}

pub fn mark_all_messages_read<R: MessageRepo>(repo: &R, user: UserId) -> Result<u64> {
    Ok(repo.mark_all_messages_read(user)?)
}
