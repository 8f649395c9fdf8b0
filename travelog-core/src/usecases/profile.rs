use super::prelude::*;
use crate::util::validate;
use time::Date;

/// Partial update of the user's own profile, `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub gender: Option<Gender>,
    pub region: Option<String>,
    pub birthday: Option<Date>,
}

pub fn get_user<R: UserRepo>(repo: &R, id: UserId) -> Result<User> {
    Ok(repo.get_user(id)?)
}

pub fn update_profile<R: UserRepo>(repo: &R, id: UserId, update: ProfileUpdate) -> Result<User> {
    let ProfileUpdate {
        nickname,
        avatar,
        bio,
        gender,
        region,
        birthday,
    } = update;
    let mut user = repo.get_user(id)?;
    if let Some(nickname) = nickname {
        if !validate::is_valid_nickname(&nickname) {
            return Err(Error::Nickname);
        }
        user.nickname = nickname.trim().to_owned();
    }
    if let Some(avatar) = avatar {
        let avatar = validate::non_blank(Some(avatar));
        if avatar.as_deref().is_some_and(|url| !validate::is_valid_url(url)) {
            return Err(Error::Url);
        }
        user.avatar = avatar;
    }
    if let Some(bio) = bio {
        user.profile.bio = validate::non_blank(Some(bio));
    }
    if let Some(gender) = gender {
        user.profile.gender = gender;
    }
    if let Some(region) = region {
        user.profile.region = validate::non_blank(Some(region));
    }
    if let Some(birthday) = birthday {
        user.profile.birthday = Some(birthday);
    }
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    Ok(user)
}
