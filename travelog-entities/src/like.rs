use crate::id::{TravelId, UserId};

/// Result of flipping the like relation between a user and a travelogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggled {
    pub travelogue: TravelId,
    pub user: UserId,
    /// The new state of the relation
    pub liked: bool,
    /// The new aggregate count
    pub likes: u64,
}
