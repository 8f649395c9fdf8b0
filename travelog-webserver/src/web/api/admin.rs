use super::*;

#[post("/admin/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::AdminCredentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::AdminSession> {
    let login = login?.into_inner();
    let credentials = usecases::AdminCredentials {
        username: &login.username,
        password: &login.password,
    };
    let admin = flows::login_admin(&db, &credentials)?;
    let token = jwt_state.generate_token(jwt::Principal::Admin(admin.id))?;
    Ok(Json(json::AdminSession {
        token,
        admin: admin.into(),
    }))
}

#[get("/admin/info")]
pub fn get_admin_info(db: sqlite::Connections, auth: Auth) -> Result<json::Admin> {
    let admin = usecases::get_admin(&db.shared()?, auth.admin()?)?;
    Ok(Json(admin.into()))
}

#[get("/admin/travelogue?<params..>")]
pub fn get_travelogues(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
    params: FeedParams,
) -> Result<json::Page<json::Travelogue>> {
    auth.admin()?;
    let req = params.try_into_request()?;
    let page = usecases::query_travelogues(&db.shared()?, &cfg.feed, req)?;
    Ok(Json(to_json::feed_page(page)))
}

#[post("/admin/travelogue/<id>/review", format = "application/json", data = "<review>")]
pub fn post_review(
    db: sqlite::Connections,
    notify: &State<Notify>,
    auth: Auth,
    id: i64,
    review: JsonResult<json::ReviewRequest>,
) -> Result<json::Travelogue> {
    let reviewer = auth.admin()?;
    let review = from_json::try_review(review?.into_inner(), reviewer)?;
    let reviewed = flows::review_travelogue(&db, &**notify.inner(), id.into(), review)?;
    Ok(Json(reviewed.travelogue.into()))
}

#[get("/admin/travelogue/<id>/reviews")]
pub fn get_reviews(db: sqlite::Connections, auth: Auth, id: i64) -> Result<Vec<json::ReviewRecord>> {
    auth.admin()?;
    let records = usecases::review_history(&db.shared()?, id.into())?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

#[get("/admin/statistics")]
pub fn get_statistics(db: sqlite::Connections, auth: Auth) -> Result<json::Statistics> {
    auth.admin()?;
    let statistics = usecases::statistics(&db.shared()?)?;
    Ok(Json(to_json::statistics(statistics)))
}
