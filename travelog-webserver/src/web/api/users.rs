use super::*;

fn user_session(jwt_state: &jwt::JwtState, user: User) -> Result<json::UserSession> {
    let token = jwt_state.generate_token(jwt::Principal::User(user.id))?;
    Ok(Json(json::UserSession {
        token,
        user: user.into(),
    }))
}

#[post("/signup", format = "application/json", data = "<new_user>")]
pub fn post_signup(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::UserSession> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(&db, new_user)?;
    user_session(jwt_state, user)
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::UserSession> {
    let login = login?.into_inner();
    let credentials = usecases::Credentials {
        account: &login.account,
        password: &login.password,
    };
    let user = flows::login_user(&db, &credentials)?;
    user_session(jwt_state, user)
}

#[post("/logout")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[get("/user/info")]
pub fn get_user_info(db: sqlite::Connections, auth: Auth) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, auth.user()?)?;
    Ok(Json(user.into()))
}

#[put("/user/info", format = "application/json", data = "<update>")]
pub fn put_user_info(
    db: sqlite::Connections,
    auth: Auth,
    update: JsonResult<json::UpdateProfile>,
) -> Result<json::User> {
    let user_id = auth.user()?;
    let update = from_json::try_profile_update(update?.into_inner())?;
    let user = flows::update_profile(&db, user_id, update)?;
    Ok(Json(user.into()))
}
