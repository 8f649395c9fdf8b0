use super::prelude::*;

pub struct Credentials<'a> {
    pub account: &'a str,
    pub password: &'a str,
}

pub fn login_with_account<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    let user = repo
        .try_get_user_by_account(login.account.trim())?
        .ok_or(Error::AccountNotFound)?;
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    Ok(user)
}

pub struct AdminCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login_admin<R>(repo: &R, login: &AdminCredentials) -> Result<Admin>
where
    R: AdminRepo,
{
    repo.try_get_admin_by_username(login.username.trim())
        .map_err(Error::Repo)
        .and_then(|admin| match admin {
            Some(admin) if admin.password.verify(login.password) => Ok(admin),
            _ => Err(Error::Credentials),
        })
}
