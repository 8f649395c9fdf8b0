use crate::{repositories, util::validate::TravelogueInvalidation};
use thiserror::Error;
use travelog_entities::status::{IllegalTransition, TravelogueStatus};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The location is missing")]
    Location,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid account")]
    Account,
    #[error("Invalid nickname")]
    Nickname,
    #[error("Invalid password")]
    Password,
    #[error("Invalid date")]
    Date,
    #[error("Invalid gender")]
    Gender,
    #[error("Invalid message kind")]
    MessageKind,
    #[error("A rejection requires a reason")]
    MissingRejectionReason,
    #[error("Invalid review action")]
    ReviewAction,
    #[error("Invalid page")]
    InvalidPage,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Invalid status")]
    InvalidStatus,
    #[error("Invalid sort field")]
    InvalidSortField,
    #[error("The account already exists")]
    AccountExists,
    #[error("The account does not exist")]
    AccountNotFound,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("A {0} travelogue cannot be edited")]
    NotEditable(TravelogueStatus),
    #[error("Only published travelogues can be liked")]
    NotLikeable,
    #[error(transparent)]
    Transition(#[from] IllegalTransition),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// The request conflicts with the current state of the
    /// addressed resource.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AccountExists | Self::NotEditable(_) | Self::NotLikeable | Self::Transition(_)
        )
    }
}

impl From<travelog_entities::password::ParseError> for Error {
    fn from(_: travelog_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<time::error::Parse> for Error {
    fn from(_: time::error::Parse) -> Self {
        Self::Date
    }
}

impl From<TravelogueInvalidation> for Error {
    fn from(err: TravelogueInvalidation) -> Self {
        match err {
            TravelogueInvalidation::Title => Self::Title,
            TravelogueInvalidation::Location => Self::Location,
            TravelogueInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
            TravelogueInvalidation::Url => Self::Url,
        }
    }
}
