use super::*;
use travelog_core::{
    gateways::notify::{NotificationEvent, NotificationGateway},
    repositories::{TravelogueRepo as _, UserRepo as _},
};

pub fn toggle_like(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user: UserId,
    id: TravelId,
) -> Result<LikeToggled> {
    let toggled = connections
        .exclusive()?
        .transaction(|conn| usecases::toggle_like(conn, user, id))?;
    if toggled.liked {
        notify_author(connections, notify, user, id);
    }
    Ok(toggled)
}

fn notify_author(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user: UserId,
    id: TravelId,
) {
    let loaded = connections
        .shared()
        .map_err(error::AppError::from)
        .and_then(|db| {
            let travelogue = db.get_travelogue(id)?;
            let liked_by = db.get_user(user)?;
            Ok((travelogue, liked_by))
        });
    match loaded {
        Ok((travelogue, liked_by)) => notify.notify(NotificationEvent::TravelogueLiked {
            travelogue: &travelogue,
            liked_by: &liked_by,
        }),
        Err(err) => warn!("Failed to notify the author of travelogue {id} about a new like: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn like_a_published_travelogue() {
        let fixture = BackendFixture::new();
        let author = fixture.create_user("traveller", "Mia");
        let fan = fixture.create_user("another-one", "Leo");
        let id = fixture.create_published_travelogue(author.id);

        let liked = flows::toggle_like(&fixture.db_connections, &fixture.notify, fan.id, id).unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes, 1);
        let unliked = flows::toggle_like(&fixture.db_connections, &fixture.notify, fan.id, id).unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes, 0);
        assert_eq!(fixture.get_travelogue(id).likes, 0);

        let messages = fixture.messages_of(author.id);
        let likes: Vec<_> = messages
            .iter()
            .filter(|m| m.kind == MessageKind::Like)
            .collect();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].from_user.as_deref(), Some("Leo"));
    }

    #[test]
    fn cannot_like_drafts() {
        let fixture = BackendFixture::new();
        let author = fixture.create_user("traveller", "Mia");
        let id = fixture.create_travelogue(author.id, false);
        let err = flows::toggle_like(&fixture.db_connections, &fixture.notify, author.id, id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::NotLikeable))
        ));
        assert_eq!(fixture.get_travelogue(id).likes, 0);
    }
}
