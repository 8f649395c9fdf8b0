use super::{get_own_travelogue, prelude::*};
use crate::util::validate::{self, TravelogueInvalidation, Validate};
use time::Date;

/// Editable content of a travelogue as submitted by its author.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct TravelogueDraft {
    pub title        : String,
    pub content      : String,
    pub location     : String,
    pub start_date   : Date,
    pub end_date     : Date,
    pub participants : u32,
    pub expenditure  : u64,
    pub video_url    : Option<String>,
    pub images       : Vec<String>,
    /// Request a review right away
    pub submit       : bool,
}

impl Validate for TravelogueDraft {
    type Error = TravelogueInvalidation;
    fn validate(&self) -> std::result::Result<(), Self::Error> {
        if !validate::is_valid_title(&self.title) {
            return Err(TravelogueInvalidation::Title);
        }
        if self.location.trim().is_empty() {
            return Err(TravelogueInvalidation::Location);
        }
        if !validate::is_valid_date_range(self.start_date, self.end_date) {
            return Err(TravelogueInvalidation::EndDateBeforeStart);
        }
        let urls = self.video_url.iter().chain(self.images.iter());
        for url in urls {
            if !validate::is_valid_url(url) {
                return Err(TravelogueInvalidation::Url);
            }
        }
        Ok(())
    }
}

impl TravelogueDraft {
    fn apply_to(self, t: &mut Travelogue) {
        let Self {
            title,
            content,
            location,
            start_date,
            end_date,
            participants,
            expenditure,
            video_url,
            images,
            submit: _,
        } = self;
        t.title = title.trim().to_owned();
        t.content = content;
        t.location = location.trim().to_owned();
        t.start_date = start_date;
        t.end_date = end_date;
        t.participants = participants;
        t.expenditure = expenditure;
        t.video_url = validate::non_blank(video_url);
        t.images = ordered_images(images);
    }
}

/// Creates a new travelogue owned by `author`.
///
/// The travelogue starts as a draft unless a review
/// is requested immediately.
pub fn create_travelogue<R>(repo: &R, author: UserId, draft: TravelogueDraft) -> Result<Travelogue>
where
    R: TravelogueRepo,
{
    draft.validate()?;
    let now = Timestamp::now();
    let status = if draft.submit {
        TravelogueStatus::default().transition(StatusEvent::Submit)?
    } else {
        TravelogueStatus::default()
    };
    let mut travelogue = Travelogue {
        id: TravelId::new(0),
        author,
        title: String::new(),
        content: String::new(),
        location: String::new(),
        start_date: draft.start_date,
        end_date: draft.end_date,
        participants: 0,
        expenditure: 0,
        video_url: None,
        images: vec![],
        likes: 0,
        status,
        rejection_reason: None,
        created_at: now,
        updated_at: now,
    };
    draft.apply_to(&mut travelogue);
    travelogue.id = repo.create_travelogue(&travelogue)?;
    log::debug!(
        "User {author} created travelogue {} ({})",
        travelogue.id,
        travelogue.status
    );
    Ok(travelogue)
}

/// Replaces the content of an existing travelogue.
///
/// Published travelogues are frozen. A rejected travelogue keeps
/// its rejection reason until it is submitted again.
pub fn update_travelogue<R>(
    repo: &R,
    author: UserId,
    id: TravelId,
    draft: TravelogueDraft,
) -> Result<Travelogue>
where
    R: TravelogueRepo,
{
    draft.validate()?;
    let mut travelogue = get_own_travelogue(repo, author, id)?;
    if !travelogue.status.is_editable() {
        return Err(Error::NotEditable(travelogue.status));
    }
    let submit = draft.submit;
    draft.apply_to(&mut travelogue);
    if submit && travelogue.status != TravelogueStatus::Pending {
        travelogue.status = travelogue.status.transition(StatusEvent::Submit)?;
        travelogue.rejection_reason = None;
    }
    travelogue.updated_at = Timestamp::now();
    repo.update_travelogue(&travelogue)?;
    Ok(travelogue)
}
