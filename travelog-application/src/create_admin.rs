use super::*;

pub fn create_admin(connections: &sqlite::Connections, username: &str, password: &str) -> Result<Admin> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_admin(conn, username, password))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_and_login_admin() {
        let fixture = BackendFixture::new();
        flows::create_admin(&fixture.db_connections, "root", "admin-secret").unwrap();
        assert!(flows::create_admin(&fixture.db_connections, "root", "other-secret").is_err());
        let login = usecases::AdminCredentials {
            username: "root",
            password: "admin-secret",
        };
        let admin = flows::login_admin(&fixture.db_connections, &login).unwrap();
        assert_eq!(admin.role, DEFAULT_ADMIN_ROLE);
    }
}
