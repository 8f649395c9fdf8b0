use super::prelude::*;

#[derive(Debug, Clone)]
pub struct TravelogueDetails {
    pub travelogue: Travelogue,
    pub author: AuthorInfo,
    pub is_liked: bool,
}

/// Loads a single travelogue for the given viewer.
///
/// Unpublished travelogues are only visible to their author,
/// everyone else gets `NotFound`.
pub fn load_travelogue<R>(repo: &R, id: TravelId, viewer: Option<UserId>) -> Result<TravelogueDetails>
where
    R: TravelogueRepo + LikeRepo,
{
    let (travelogue, author) = repo.get_travelogue_with_author(id)?;
    let visible = match travelogue.status {
        TravelogueStatus::Deleted => false,
        TravelogueStatus::Published => true,
        _ => viewer.is_some_and(|v| travelogue.is_authored_by(v)),
    };
    if !visible {
        log::debug!("Travelogue {id} is not visible for {viewer:?}");
        return Err(RepoError::NotFound.into());
    }
    let is_liked = match viewer {
        Some(user) => repo.is_liked_by(user, id)?,
        None => false,
    };
    Ok(TravelogueDetails {
        travelogue,
        author,
        is_liked,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use travelog_entities::builders::*;

    fn db() -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).finish());
        db.travelogues.borrow_mut().push(
            Travelogue::build()
                .id(1)
                .author(1)
                .status(TravelogueStatus::Published)
                .finish(),
        );
        db.travelogues.borrow_mut().push(
            Travelogue::build()
                .id(2)
                .author(1)
                .status(TravelogueStatus::Pending)
                .finish(),
        );
        db
    }

    #[test]
    fn published_travelogues_are_public() {
        let db = db();
        let details = load_travelogue(&db, TravelId::new(1), None).unwrap();
        assert_eq!(details.author.id, UserId::new(1));
        assert!(!details.is_liked);
        db.likes.borrow_mut().push((UserId::new(2), TravelId::new(1)));
        let details = load_travelogue(&db, TravelId::new(1), Some(UserId::new(2))).unwrap();
        assert!(details.is_liked);
    }

    #[test]
    fn unpublished_travelogues_are_private() {
        let db = db();
        assert!(load_travelogue(&db, TravelId::new(2), Some(UserId::new(1))).is_ok());
        assert!(matches!(
            load_travelogue(&db, TravelId::new(2), Some(UserId::new(2))),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(matches!(
            load_travelogue(&db, TravelId::new(2), None),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
