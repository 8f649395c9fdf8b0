use time::Date;

use crate::{id::*, image::Image, status::TravelogueStatus, time::Timestamp};

/// A user-authored trip post.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Travelogue {
    pub id               : TravelId,
    pub author           : UserId,
    pub title            : String,
    pub content          : String,
    pub location         : String,
    pub start_date       : Date,
    pub end_date         : Date,
    pub participants     : u32,
    pub expenditure      : u64,
    pub video_url        : Option<String>,
    pub images           : Vec<Image>,
    pub likes            : u64,
    pub status           : TravelogueStatus,
    /// Only present while the status is [`TravelogueStatus::Rejected`]
    pub rejection_reason : Option<String>,
    pub created_at       : Timestamp,
    pub updated_at       : Timestamp,
}

impl Travelogue {
    /// Number of travel days, both start and end day included.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    pub fn cover_image(&self) -> Option<&Image> {
        self.images.iter().min_by_key(|img| img.order)
    }

    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author == user
    }

    /// `rejection_reason` is meaningful if and only if the travelogue is rejected.
    pub fn has_consistent_rejection_reason(&self) -> bool {
        match self.status {
            TravelogueStatus::Rejected => self
                .rejection_reason
                .as_deref()
                .is_some_and(|r| !r.trim().is_empty()),
            _ => self.rejection_reason.is_none(),
        }
    }
}

/// Public information about the author that is
/// shown along with a travelogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub id: UserId,
    pub nickname: String,
    pub avatar: Option<String>,
}
