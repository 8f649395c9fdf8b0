#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # travelog-entities
//!
//! Reusable, agnostic domain entities for travelog.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.
//! The only exception is the travelogue life cycle in [`status`], which is part of the
//! entity itself and must not be bypassed by any layer.

pub mod admin;
pub mod id;
pub mod image;
pub mod like;
pub mod message;
pub mod password;
pub mod review;
pub mod status;
pub mod time;
pub mod travelogue;
pub mod user;
#[cfg(feature = "url")]
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
