use travelog_entities::{
    review::ReviewRecord,
    travelogue::Travelogue,
    user::User,
};

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    TravelogueReviewed {
        travelogue: &'a Travelogue,
        record: &'a ReviewRecord,
    },
    TravelogueLiked {
        travelogue: &'a Travelogue,
        liked_by: &'a User,
    },
}

/// Delivers notifications on a best-effort basis.
///
/// Implementations must never fail the calling operation:
/// errors are expected to be logged and swallowed.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
