#[macro_use]
extern crate log;

mod create_admin;
mod delete_travelogue;
mod login;
mod mark_message_read;
mod notify;
mod register;
mod review_travelogue;
mod save_travelogue;
mod submit_travelogue;
mod toggle_like;
mod update_profile;

pub mod prelude {
    pub use super::{
        create_admin::*, delete_travelogue::*, login::*, mark_message_read::*, notify::*,
        register::*, review_travelogue::*, save_travelogue::*, submit_travelogue::*,
        toggle_like::*, update_profile::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use travelog_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use travelog_db_sqlite::Connections;
}
