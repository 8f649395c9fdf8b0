use super::*;
use travelog_core::gateways::notify::{NotificationEvent, NotificationGateway};

pub fn review_travelogue(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    id: TravelId,
    review: usecases::Review,
) -> Result<usecases::Reviewed> {
    // Status and audit trail are changed together or not at all
    let reviewed = connections.exclusive()?.transaction(|conn| {
        usecases::review_travelogue(conn, id, review).map_err(|err| {
            debug!("Failed to review travelogue {id}: {err}");
            err
        })
    })?;
    if let Some(record) = &reviewed.record {
        notify.notify(NotificationEvent::TravelogueReviewed {
            travelogue: &reviewed.travelogue,
            record,
        });
    }
    Ok(reviewed)
}
