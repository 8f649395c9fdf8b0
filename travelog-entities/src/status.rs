//! Life cycle of a travelogue.
//!
//! ```text
//! draft     --submit-->  pending
//! pending   --approve--> published
//! pending   --reject-->  rejected
//! rejected  --submit-->  pending
//! *         --delete-->  deleted   (except deleted itself)
//! ```
//!
//! `deleted` is terminal.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type StatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, AsRefStr, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TravelogueStatus {
    Draft     = 0,
    Pending   = 1,
    Published = 2,
    Rejected  = 3,
    Deleted   = 4,
}

/// Something that happens to a travelogue and might change its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusEvent {
    /// The author hands the travelogue in for moderation.
    Submit,
    Approve,
    Reject,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("A {from} travelogue cannot {event}")]
pub struct IllegalTransition {
    pub from: TravelogueStatus,
    pub event: StatusEvent,
}

impl TravelogueStatus {
    pub const fn default() -> Self {
        Self::Draft
    }

    pub fn exists(self) -> bool {
        self != Self::Deleted
    }

    pub fn is_visible_to_public(self) -> bool {
        self == Self::Published
    }

    /// Content may only be edited while the travelogue has
    /// not been published (or deleted) yet.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Draft | Self::Pending | Self::Rejected)
    }

    pub fn transition(self, event: StatusEvent) -> Result<Self, IllegalTransition> {
        use StatusEvent as E;
        use TravelogueStatus as S;
        let next = match (self, event) {
            (S::Draft | S::Rejected, E::Submit) => S::Pending,
            (S::Pending, E::Approve) => S::Published,
            (S::Pending, E::Reject) => S::Rejected,
            (S::Deleted, E::Delete) => return Err(IllegalTransition { from: self, event }),
            (_, E::Delete) => S::Deleted,
            (from, event) => return Err(IllegalTransition { from, event }),
        };
        Ok(next)
    }
}

#[derive(Debug, Error)]
#[error("Invalid travelogue status primitive: {0}")]
pub struct InvalidStatusPrimitive(pub StatusPrimitive);

impl TryFrom<StatusPrimitive> for TravelogueStatus {
    type Error = InvalidStatusPrimitive;
    fn try_from(from: StatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidStatusPrimitive(from))
    }
}

impl From<TravelogueStatus> for StatusPrimitive {
    fn from(from: TravelogueStatus) -> Self {
        match from {
            TravelogueStatus::Draft => 0,
            TravelogueStatus::Pending => 1,
            TravelogueStatus::Published => 2,
            TravelogueStatus::Rejected => 3,
            TravelogueStatus::Deleted => 4,
        }
    }
}
