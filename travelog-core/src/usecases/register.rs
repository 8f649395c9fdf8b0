use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub nickname: String,
    pub account: String,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser {
        nickname,
        account,
        password,
    } = u;
    let account = account.trim().to_owned();
    let nickname = nickname.trim().to_owned();
    if !validate::is_valid_account(&account) {
        return Err(Error::Account);
    }
    if !validate::is_valid_nickname(&nickname) {
        return Err(Error::Nickname);
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_account(&account)?.is_some() {
        return Err(Error::AccountExists);
    }
    let now = Timestamp::now();
    let mut user = User {
        id: UserId::new(0),
        account,
        nickname,
        password,
        avatar: None,
        profile: Profile::default(),
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating new user: account = {}", user.account);
    user.id = repo.create_user(&user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AccountExists,
        err => err.into(),
    })?;
    Ok(user)
}
