use super::*;

impl AdminRepo for DbReadOnly<'_> {
    fn create_admin(&self, _admin: &Admin) -> Result<AdminId> {
        unreachable!();
    }
    fn get_admin(&self, id: AdminId) -> Result<Admin> {
        get_admin(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        try_get_admin_by_username(&mut self.conn.borrow_mut(), username)
    }
}

impl AdminRepo for DbReadWrite<'_> {
    fn create_admin(&self, admin: &Admin) -> Result<AdminId> {
        create_admin(&mut self.conn.borrow_mut(), admin)
    }
    fn get_admin(&self, id: AdminId) -> Result<Admin> {
        get_admin(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        try_get_admin_by_username(&mut self.conn.borrow_mut(), username)
    }
}

impl AdminRepo for DbConnection<'_> {
    fn create_admin(&self, admin: &Admin) -> Result<AdminId> {
        create_admin(&mut self.conn.borrow_mut(), admin)
    }
    fn get_admin(&self, id: AdminId) -> Result<Admin> {
        get_admin(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        try_get_admin_by_username(&mut self.conn.borrow_mut(), username)
    }
}

impl From<models::AdminEntity> for Admin {
    fn from(from: models::AdminEntity) -> Self {
        let models::AdminEntity {
            id,
            username,
            password,
            role,
        } = from;
        Self {
            id: id.into(),
            username,
            password: Password::from_hash(password),
            role,
        }
    }
}

fn create_admin(conn: &mut SqliteConnection, admin: &Admin) -> Result<AdminId> {
    let new_admin = models::NewAdmin {
        username: &admin.username,
        password: admin.password.as_hash(),
        role: &admin.role,
    };
    diesel::insert_into(schema::admins::table)
        .values(&new_admin)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn get_admin(conn: &mut SqliteConnection, id: AdminId) -> Result<Admin> {
    use schema::admins::dsl;
    Ok(dsl::admins
        .filter(dsl::id.eq(id.value()))
        .first::<models::AdminEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_admin_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<Admin>> {
    use schema::admins::dsl;
    Ok(dsl::admins
        .filter(dsl::username.eq(username))
        .first::<models::AdminEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
