use crate::{id::AdminId, password::Password};

/// Administrators form a separate identity domain
/// and are never mixed up with regular users.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id       : AdminId,
    pub username : String,
    pub password : Password,
    pub role     : String,
}

pub const DEFAULT_ADMIN_ROLE: &str = "moderator";
