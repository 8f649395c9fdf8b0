// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sql_types::BigInt,
};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use travelog_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod admin;
mod like;
mod message;
mod review;
mod travelogue;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn inserted_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_status(status: i16) -> Result<TravelogueStatus> {
    TravelogueStatus::try_from(status).map_err(|err| anyhow!(err).into())
}

fn store_status(status: TravelogueStatus) -> i16 {
    StatusPrimitive::from(status)
}

fn load_date(date: &str) -> Result<time::Date> {
    parse_date(date).map_err(|err| anyhow!("Invalid date '{date}': {err}").into())
}

fn load_gender(gender: i16) -> Result<Gender> {
    Gender::from_i16(gender).ok_or_else(|| anyhow!("Invalid gender: {gender}").into())
}

fn store_gender(gender: Gender) -> i16 {
    gender.to_i16().unwrap_or_default()
}

fn to_i64(value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|err| anyhow!(err).into())
}

fn to_u64(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|err| anyhow!("Invalid negative value {value}: {err}").into())
}
