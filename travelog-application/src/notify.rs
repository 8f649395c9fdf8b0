use super::*;
use travelog_core::gateways::notify::{NotificationEvent, NotificationGateway};

/// Delivers notifications as messages into the inbox of the recipient.
///
/// Each message is stored in its own transaction, failures are only logged.
#[derive(Clone)]
pub struct InboxNotifier {
    connections: sqlite::Connections,
}

impl InboxNotifier {
    pub const fn new(connections: sqlite::Connections) -> Self {
        Self { connections }
    }

    fn store(&self, message: &NewMessage) -> Result<MessageId> {
        Ok(self
            .connections
            .exclusive()?
            .transaction(|conn| usecases::send_message(conn, message))?)
    }
}

impl NotificationGateway for InboxNotifier {
    fn notify(&self, event: NotificationEvent) {
        let message = match event {
            NotificationEvent::TravelogueReviewed { travelogue, record } => {
                Some(usecases::review_message(travelogue, record))
            }
            NotificationEvent::TravelogueLiked {
                travelogue,
                liked_by,
            } => usecases::like_message(travelogue, liked_by),
        };
        let Some(message) = message else {
            return;
        };
        match self.store(&message) {
            Ok(id) => debug!("Stored {} message {id} for user {}", message.kind, message.recipient),
            Err(err) => warn!(
                "Failed to notify user {} about travelogue {:?}: {err}",
                message.recipient, message.travelogue
            ),
        }
    }
}
