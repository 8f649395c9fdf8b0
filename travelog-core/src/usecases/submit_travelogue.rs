use super::{get_own_travelogue, prelude::*};

/// Requests a review of a draft or rejected travelogue.
pub fn submit_travelogue<R>(repo: &R, author: UserId, id: TravelId) -> Result<Travelogue>
where
    R: TravelogueRepo,
{
    let mut travelogue = get_own_travelogue(repo, author, id)?;
    travelogue.status = travelogue.status.transition(StatusEvent::Submit)?;
    travelogue.rejection_reason = None;
    travelogue.updated_at = Timestamp::now();
    repo.update_travelogue(&travelogue)?;
    Ok(travelogue)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use travelog_entities::builders::*;

    #[test]
    fn submit_twice() {
        let db = MockDb::default();
        db.travelogues
            .borrow_mut()
            .push(Travelogue::build().id(3).author(5).finish());
        let t = submit_travelogue(&db, UserId::new(5), TravelId::new(3)).unwrap();
        assert_eq!(t.status, TravelogueStatus::Pending);
        let err = submit_travelogue(&db, UserId::new(5), TravelId::new(3)).unwrap_err();
        assert!(err.is_conflict());
    }
}
