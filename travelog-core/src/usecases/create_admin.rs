use super::prelude::*;

pub fn create_admin<R: AdminRepo>(repo: &R, username: &str, password: &str) -> Result<Admin> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::Account);
    }
    if repo.try_get_admin_by_username(username)?.is_some() {
        return Err(Error::AccountExists);
    }
    let mut admin = Admin {
        id: AdminId::new(0),
        username: username.to_owned(),
        password: password.parse()?,
        role: DEFAULT_ADMIN_ROLE.to_owned(),
    };
    admin.id = repo.create_admin(&admin)?;
    log::info!("Created admin '{}' ({})", admin.username, admin.id);
    Ok(admin)
}

pub fn get_admin<R: AdminRepo>(repo: &R, id: AdminId) -> Result<Admin> {
    Ok(repo.get_admin(id)?)
}
