use std::str::FromStr;

use thiserror::Error;
use time::Date;
use travelog_entities::{url::Url, user};

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const TITLE_MAX_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TravelogueInvalidation {
    #[error("The title is invalid")]
    Title,
    #[error("The location is missing")]
    Location,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid URL")]
    Url,
}

pub fn is_valid_title(title: &str) -> bool {
    let title = title.trim();
    !title.is_empty() && title.chars().count() <= TITLE_MAX_LEN
}

pub fn is_valid_date_range(start: Date, end: Date) -> bool {
    start <= end
}

pub fn is_valid_url(url: &str) -> bool {
    Url::from_str(url).is_ok()
}

pub fn is_valid_account(account: &str) -> bool {
    let len = account.chars().count();
    (user::ACCOUNT_MIN_LEN..=user::NAME_MAX_LEN).contains(&len)
        && !account.chars().any(char::is_whitespace)
}

pub fn is_valid_nickname(nickname: &str) -> bool {
    let len = nickname.trim().chars().count();
    (user::NICKNAME_MIN_LEN..=user::NAME_MAX_LEN).contains(&len)
}

/// Trims an optional text and maps blank values to `None`.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
