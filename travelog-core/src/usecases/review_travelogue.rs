use super::{get_existing_travelogue, prelude::*};
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct Review {
    pub action: ReviewAction,
    pub reason: Option<String>,
    pub reviewer: Option<AdminId>,
}

#[derive(Debug, Clone)]
pub struct Reviewed {
    pub travelogue: Travelogue,
    /// `None` for deletions
    pub record: Option<ReviewRecord>,
}

/// Applies a moderation decision.
///
/// The caller is responsible for running this inside a single
/// transaction, otherwise the status and the audit trail might
/// diverge.
pub fn review_travelogue<R>(repo: &R, id: TravelId, review: Review) -> Result<Reviewed>
where
    R: TravelogueRepo + ReviewRepo,
{
    let Review {
        action,
        reason,
        reviewer,
    } = review;
    let reason = validate::non_blank(reason);
    if action == ReviewAction::Reject && reason.is_none() {
        return Err(Error::MissingRejectionReason);
    }
    let mut travelogue = get_existing_travelogue(repo, id)?;
    let from = travelogue.status;
    travelogue.status = from.transition(action.status_event())?;
    travelogue.rejection_reason = match action {
        ReviewAction::Reject => reason,
        _ => None,
    };
    let now = Timestamp::now();
    travelogue.updated_at = now;
    repo.update_travelogue(&travelogue)?;
    log::info!(
        "Travelogue {id} reviewed: {from} -> {} ({action})",
        travelogue.status
    );
    let record = if action.is_recorded() {
        let new_record = NewReviewRecord {
            travelogue: id,
            action,
            rejection_reason: travelogue.rejection_reason.clone(),
            reviewer,
            review_time: now,
        };
        let record_id = repo.add_review_record(&new_record)?;
        let NewReviewRecord {
            travelogue,
            action,
            rejection_reason,
            reviewer,
            review_time,
        } = new_record;
        Some(ReviewRecord {
            id: record_id,
            travelogue,
            action,
            rejection_reason,
            reviewer,
            review_time,
        })
    } else {
        None
    };
    Ok(Reviewed { travelogue, record })
}

/// All recorded decisions about a travelogue, oldest first.
pub fn review_history<R>(repo: &R, id: TravelId) -> Result<Vec<ReviewRecord>>
where
    R: TravelogueRepo + ReviewRepo,
{
    // fails with NotFound for unknown ids
    repo.get_travelogue(id)?;
    Ok(repo.load_review_records(id)?)
}
