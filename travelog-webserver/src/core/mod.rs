pub use travelog_core::{gateways, repositories, usecases};

pub mod entities {
    pub use travelog_core::entities::*;
}

pub mod prelude {

    use std::result;

    pub use travelog_application::error::*;

    pub use super::{entities::*, repositories::*};

    pub type Result<T> = result::Result<T, travelog_application::error::AppError>;
}
