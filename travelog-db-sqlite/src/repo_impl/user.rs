use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<UserId> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_account(&self, account: &str) -> Result<Option<User>> {
        try_get_user_by_account(&mut self.conn.borrow_mut(), account)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl UserRepo for DbReadWrite<'_> {
    fn create_user(&self, user: &User) -> Result<UserId> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_account(&self, account: &str) -> Result<Option<User>> {
        try_get_user_by_account(&mut self.conn.borrow_mut(), account)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<UserId> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_account(&self, account: &str) -> Result<Option<User>> {
        try_get_user_by_account(&mut self.conn.borrow_mut(), account)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn new_user(u: &User) -> models::NewUser<'_> {
    let User {
        id: _,
        account,
        nickname,
        password,
        avatar,
        profile,
        created_at,
        updated_at,
    } = u;
    models::NewUser {
        account,
        nickname,
        password: password.as_hash(),
        avatar: avatar.as_deref(),
        bio: profile.bio.as_deref(),
        gender: store_gender(profile.gender),
        region: profile.region.as_deref(),
        birthday: profile.birthday.map(format_date),
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        account,
        nickname,
        password,
        avatar,
        bio,
        gender,
        region,
        birthday,
        created_at,
        updated_at,
    } = entity;
    Ok(User {
        id: id.into(),
        account,
        nickname,
        password: Password::from_hash(password),
        avatar,
        profile: Profile {
            bio,
            gender: load_gender(gender)?,
            region,
            birthday: birthday.as_deref().map(load_date).transpose()?,
        },
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<UserId> {
    diesel::insert_into(schema::users::table)
        .values(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.value())))
        .set(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: UserId) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq(id.value()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_user)
}

fn try_get_user_by_account(conn: &mut SqliteConnection, account: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::account.eq(account))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
