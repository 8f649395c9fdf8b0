pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use travelog_entities::{
        admin::*, id::*, image::*, like::*, message::*, password::*, review::*, status::*,
        time::*, travelogue::*, user::*,
    };
}

pub use self::repositories::Error as RepoError;
