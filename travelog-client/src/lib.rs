//! Native client for the travelog API.
//!
//! Besides thin HTTP wrappers this crate owns the state a front end keeps
//! between requests: the persisted session, the liked mirror with its
//! optimistic toggle, the cached inbox, the search history and the
//! route level auth gate.

#[macro_use]
extern crate log;

mod admin;
mod auth_gate;
mod config;
mod error;
mod like;
mod messages;
mod public;
mod search_history;
mod session;
mod store;
mod user;
mod util;

pub use self::{
    admin::*, auth_gate::*, config::*, error::*, like::*, messages::*, public::*,
    search_history::*, session::*, store::*, user::*, util::into_json,
};

pub use travelog_boundary as json;
