use super::*;

pub fn login_user(connections: &sqlite::Connections, login: &usecases::Credentials) -> Result<User> {
    let db = connections.shared()?;
    usecases::login_with_account(&db, login).map_err(|err| {
        debug!("Login of '{}' failed: {err}", login.account);
        err.into()
    })
}

pub fn login_admin(
    connections: &sqlite::Connections,
    login: &usecases::AdminCredentials,
) -> Result<Admin> {
    let db = connections.shared()?;
    usecases::login_admin(&db, login).map_err(|err| {
        warn!("Admin login of '{}' failed: {err}", login.username);
        err.into()
    })
}
