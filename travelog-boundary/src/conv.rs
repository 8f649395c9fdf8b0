use super::*;
use travelog_entities as e;

impl From<e::status::TravelogueStatus> for TravelogueStatus {
    fn from(from: e::status::TravelogueStatus) -> Self {
        use e::status::TravelogueStatus as S;
        match from {
            S::Draft => Self::Draft,
            S::Pending => Self::Pending,
            S::Published => Self::Published,
            S::Rejected => Self::Rejected,
            S::Deleted => Self::Deleted,
        }
    }
}

impl From<TravelogueStatus> for e::status::TravelogueStatus {
    fn from(from: TravelogueStatus) -> Self {
        use TravelogueStatus as S;
        match from {
            S::Draft => Self::Draft,
            S::Pending => Self::Pending,
            S::Published => Self::Published,
            S::Rejected => Self::Rejected,
            S::Deleted => Self::Deleted,
        }
    }
}

impl From<e::image::Image> for Image {
    fn from(from: e::image::Image) -> Self {
        let e::image::Image { id, url, order } = from;
        Self {
            image_id: id.map(Into::into),
            url,
            order,
        }
    }
}

impl From<e::travelogue::AuthorInfo> for Author {
    fn from(from: e::travelogue::AuthorInfo) -> Self {
        let e::travelogue::AuthorInfo {
            id,
            nickname,
            avatar,
        } = from;
        Self {
            user_id: id.into(),
            nickname,
            avatar,
        }
    }
}

impl From<e::travelogue::Travelogue> for Travelogue {
    fn from(from: e::travelogue::Travelogue) -> Self {
        let e::travelogue::Travelogue {
            id,
            author,
            title,
            content,
            location,
            start_date,
            end_date,
            participants,
            expenditure,
            video_url,
            images,
            likes,
            status,
            rejection_reason,
            created_at,
            updated_at,
        } = from;
        Self {
            travel_id: id.into(),
            user_id: author.into(),
            title,
            content,
            location,
            start_date: e::time::format_date(start_date),
            end_date: e::time::format_date(end_date),
            participants,
            expenditure,
            video_url,
            images: images.into_iter().map(Into::into).collect(),
            likes,
            status: status.into(),
            rejection_reason,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            author: None,
            is_liked: None,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        use num_traits::ToPrimitive as _;
        let e::user::User {
            id,
            account,
            nickname,
            password: _,
            avatar,
            profile,
            created_at,
            updated_at: _,
        } = from;
        let e::user::Profile {
            bio,
            gender,
            region,
            birthday,
        } = profile;
        Self {
            user_id: id.into(),
            account,
            nickname,
            avatar,
            bio,
            gender: gender.to_u8().unwrap_or(2),
            region,
            birthday: birthday.map(e::time::format_date),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::admin::Admin> for Admin {
    fn from(from: e::admin::Admin) -> Self {
        let e::admin::Admin {
            id,
            username,
            password: _,
            role,
        } = from;
        Self {
            admin_id: id.into(),
            username,
            role,
        }
    }
}

impl From<e::like::LikeToggled> for LikeToggled {
    fn from(from: e::like::LikeToggled) -> Self {
        let e::like::LikeToggled { liked, likes, .. } = from;
        Self { liked, likes }
    }
}

impl From<e::review::ReviewRecord> for ReviewRecord {
    fn from(from: e::review::ReviewRecord) -> Self {
        let e::review::ReviewRecord {
            id,
            travelogue,
            action,
            rejection_reason,
            reviewer,
            review_time,
        } = from;
        Self {
            review_id: id.into(),
            travel_id: travelogue.into(),
            action: action.to_string(),
            rejection_reason,
            reviewer_id: reviewer.map(Into::into),
            review_time: review_time.as_millis(),
        }
    }
}

impl From<e::message::Message> for Message {
    fn from(from: e::message::Message) -> Self {
        let e::message::Message {
            id,
            recipient: _,
            kind,
            title,
            content,
            outcome,
            travelogue,
            from_user,
            created_at,
            is_read,
        } = from;
        Self {
            id: id.into(),
            kind: kind.to_string(),
            title,
            content,
            status: outcome.map(|o| o.to_string()),
            travel_id: travelogue.map(Into::into),
            from_user,
            created_at: created_at.as_millis(),
            is_read,
        }
    }
}
