pub use travelog_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;
    use num_traits::FromPrimitive as _;
    use usecases::Error as ParameterError;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            nickname,
            account,
            password,
        } = from;
        usecases::NewUser {
            nickname,
            account,
            password,
        }
    }

    pub fn try_travelogue_draft(
        from: SaveTravelogue,
    ) -> Result<(Option<e::TravelId>, usecases::TravelogueDraft), ParameterError> {
        let SaveTravelogue {
            travel_id,
            title,
            content,
            images,
            location,
            start_date,
            end_date,
            participants,
            expenditure,
            video_url,
            submit,
        } = from;
        let draft = usecases::TravelogueDraft {
            title,
            content,
            location,
            start_date: e::parse_date(&start_date)?,
            end_date: e::parse_date(&end_date)?,
            participants,
            expenditure,
            video_url: video_url.filter(|url| !url.trim().is_empty()),
            images,
            submit,
        };
        Ok((travel_id.map(e::TravelId::new), draft))
    }

    pub fn try_profile_update(from: UpdateProfile) -> Result<usecases::ProfileUpdate, ParameterError> {
        let UpdateProfile {
            nickname,
            avatar,
            bio,
            gender,
            region,
            birthday,
        } = from;
        let gender = gender
            .map(|g| e::Gender::from_u8(g).ok_or(ParameterError::Gender))
            .transpose()?;
        let birthday = birthday
            .filter(|b| !b.trim().is_empty())
            .map(|b| e::parse_date(&b))
            .transpose()?;
        Ok(usecases::ProfileUpdate {
            nickname,
            avatar,
            bio,
            gender,
            region,
            birthday,
        })
    }

    /// An explicit `action` takes precedence over a target `status`.
    pub fn try_review(
        from: ReviewRequest,
        reviewer: e::AdminId,
    ) -> Result<usecases::Review, ParameterError> {
        let ReviewRequest {
            action,
            status,
            reason,
        } = from;
        let action = match (action, status) {
            (Some(action), _) => action
                .trim()
                .parse::<e::ReviewAction>()
                .map_err(|_| ParameterError::ReviewAction)?,
            (None, Some(TravelogueStatus::Published)) => e::ReviewAction::Approve,
            (None, Some(TravelogueStatus::Rejected)) => e::ReviewAction::Reject,
            (None, Some(TravelogueStatus::Deleted)) => e::ReviewAction::Delete,
            (None, _) => return Err(ParameterError::ReviewAction),
        };
        Ok(usecases::Review {
            action,
            reason,
            reviewer: Some(reviewer),
        })
    }

    pub fn try_status(from: &str) -> Result<e::TravelogueStatus, ParameterError> {
        TravelogueStatus::from_name(from)
            .map(Into::into)
            .ok_or(ParameterError::InvalidStatus)
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn travelogue_with_author((travelogue, author): (e::Travelogue, e::AuthorInfo)) -> Travelogue {
        Travelogue {
            author: Some(author.into()),
            ..travelogue.into()
        }
    }

    pub fn travelogue_details(from: usecases::TravelogueDetails) -> Travelogue {
        let usecases::TravelogueDetails {
            travelogue,
            author,
            is_liked,
        } = from;
        Travelogue {
            is_liked: Some(is_liked),
            ..travelogue_with_author((travelogue, author))
        }
    }

    pub fn feed_page(from: usecases::Page<(e::Travelogue, e::AuthorInfo)>) -> Page<Travelogue> {
        let usecases::Page {
            data,
            page,
            limit,
            total,
            pages,
        } = from.map(travelogue_with_author);
        Page {
            data,
            page,
            limit,
            total,
            pages,
        }
    }

    pub fn statistics(from: usecases::Statistics) -> Statistics {
        let total = from.total();
        let usecases::Statistics {
            draft,
            pending,
            published,
            rejected,
            deleted,
        } = from;
        Statistics {
            draft,
            pending,
            published,
            rejected,
            deleted,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_request() -> SaveTravelogue {
        SaveTravelogue {
            travel_id: None,
            title: "Lijiang".into(),
            content: "Old town".into(),
            images: vec![],
            location: "Yunnan".into(),
            start_date: "2024-05-01".into(),
            end_date: "2024-05-04".into(),
            participants: 3,
            expenditure: 4200,
            video_url: Some("  ".into()),
            submit: true,
        }
    }

    #[test]
    fn parse_travelogue_draft() {
        let (id, draft) = from_json::try_travelogue_draft(save_request()).unwrap();
        assert!(id.is_none());
        assert_eq!(e::format_date(draft.start_date), "2024-05-01");
        assert!(draft.video_url.is_none());
        assert!(draft.submit);
    }

    #[test]
    fn reject_malformed_dates() {
        let req = SaveTravelogue {
            end_date: "04.05.2024".into(),
            ..save_request()
        };
        assert!(matches!(
            from_json::try_travelogue_draft(req),
            Err(usecases::Error::Date)
        ));
    }

    #[test]
    fn review_by_status_or_action() {
        let admin = e::AdminId::new(1);
        let req = ReviewRequest {
            status: Some(TravelogueStatus::Published),
            ..Default::default()
        };
        assert_eq!(from_json::try_review(req, admin).unwrap().action, e::ReviewAction::Approve);
        let req = ReviewRequest {
            action: Some("reject".into()),
            status: Some(TravelogueStatus::Published),
            reason: Some("广告内容".into()),
        };
        let review = from_json::try_review(req, admin).unwrap();
        assert_eq!(review.action, e::ReviewAction::Reject);
        assert_eq!(review.reviewer, Some(admin));
        let req = ReviewRequest {
            status: Some(TravelogueStatus::Pending),
            ..Default::default()
        };
        assert!(from_json::try_review(req, admin).is_err());
        let req = ReviewRequest {
            action: Some("publish".into()),
            ..Default::default()
        };
        assert!(from_json::try_review(req, admin).is_err());
    }

    #[test]
    fn invalid_gender() {
        let update = UpdateProfile {
            gender: Some(7),
            ..Default::default()
        };
        assert!(matches!(
            from_json::try_profile_update(update),
            Err(usecases::Error::Gender)
        ));
    }
}
