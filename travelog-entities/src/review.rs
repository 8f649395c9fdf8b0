use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, status::StatusEvent, time::Timestamp};

/// Administrative decision about a pending or existing travelogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
    Delete,
}

impl ReviewAction {
    pub const fn status_event(self) -> StatusEvent {
        match self {
            Self::Approve => StatusEvent::Approve,
            Self::Reject => StatusEvent::Reject,
            Self::Delete => StatusEvent::Delete,
        }
    }

    /// Only approvals and rejections end up in the audit trail.
    pub const fn is_recorded(self) -> bool {
        matches!(self, Self::Approve | Self::Reject)
    }
}

/// An entry of the append-only audit trail of reviews.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub id               : ReviewId,
    pub travelogue       : TravelId,
    pub action           : ReviewAction,
    pub rejection_reason : Option<String>,
    pub reviewer         : Option<AdminId>,
    pub review_time      : Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReviewRecord {
    pub travelogue: TravelId,
    pub action: ReviewAction,
    pub rejection_reason: Option<String>,
    pub reviewer: Option<AdminId>,
    pub review_time: Timestamp,
}
