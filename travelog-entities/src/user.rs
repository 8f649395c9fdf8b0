use num_derive::{FromPrimitive, ToPrimitive};
use time::Date;

use crate::{id::UserId, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : UserId,
    pub account    : String,
    pub nickname   : String,
    pub password   : Password,
    pub avatar     : Option<String>,
    pub profile    : Profile,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub bio      : Option<String>,
    pub gender   : Gender,
    pub region   : Option<String>,
    pub birthday : Option<Date>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Gender {
    Male        = 0,
    Female      = 1,
    #[default]
    Undisclosed = 2,
}

pub const ACCOUNT_MIN_LEN: usize = 6;
pub const NICKNAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 255;
