use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MessageKind {
    Review,
    Like,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ReviewOutcome {
    Approved,
    Rejected,
}

/// A notification for a single recipient.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id         : MessageId,
    pub recipient  : UserId,
    pub kind       : MessageKind,
    pub title      : String,
    pub content    : String,
    pub outcome    : Option<ReviewOutcome>,
    pub travelogue : Option<TravelId>,
    pub from_user  : Option<String>,
    pub created_at : Timestamp,
    pub is_read    : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub recipient  : UserId,
    pub kind       : MessageKind,
    pub title      : String,
    pub content    : String,
    pub outcome    : Option<ReviewOutcome>,
    pub travelogue : Option<TravelId>,
    pub from_user  : Option<String>,
    pub created_at : Timestamp,
}
