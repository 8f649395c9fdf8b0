use super::*;

pub fn register_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            debug!("Failed to register user: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_login() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("traveller", "Mia");
        let credentials = usecases::Credentials {
            account: "traveller",
            password: "secret1",
        };
        let logged_in = flows::login_user(&fixture.db_connections, &credentials).unwrap();
        assert_eq!(logged_in.id, user.id);

        let err = flows::register_user(
            &fixture.db_connections,
            usecases::NewUser {
                nickname: "Someone".into(),
                account: "traveller".into(),
                password: "secret1".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::AccountExists))
        ));
    }
}
