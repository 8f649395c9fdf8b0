use super::*;

#[get("/travelogue/list?<params..>")]
pub fn get_list(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    params: FeedParams,
) -> Result<json::Page<json::Travelogue>> {
    let req = params.try_into_request()?;
    let page = usecases::query_public_feed(&db.shared()?, &cfg.feed, req)?;
    Ok(Json(to_json::feed_page(page)))
}

#[get("/travelogue/search?<params..>")]
pub fn get_search(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    params: FeedParams,
) -> Result<json::Page<json::Travelogue>> {
    // Searching without a keyword is the same as browsing the feed
    let req = params.try_into_request()?;
    let page = usecases::query_public_feed(&db.shared()?, &cfg.feed, req)?;
    Ok(Json(to_json::feed_page(page)))
}

#[get("/travelogue/mine?<params..>")]
pub fn get_mine(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
    params: FeedParams,
) -> Result<json::Page<json::Travelogue>> {
    let user = auth.user()?;
    let req = params.try_into_request()?;
    let page = usecases::query_own_travelogues(&db.shared()?, &cfg.feed, user, req)?;
    Ok(Json(to_json::feed_page(page)))
}

#[get("/travelogue/liked?<params..>")]
pub fn get_liked(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    auth: Auth,
    params: FeedParams,
) -> Result<json::Page<json::Travelogue>> {
    let user = auth.user()?;
    let req = params.try_into_request()?;
    let page = usecases::query_liked_travelogues(&db.shared()?, &cfg.feed, user, req)?;
    Ok(Json(to_json::feed_page(page)))
}

#[get("/travelogue/<id>")]
pub fn get_travelogue(db: sqlite::Connections, auth: Auth, id: i64) -> Result<json::Travelogue> {
    let details = usecases::load_travelogue(&db.shared()?, id.into(), auth.viewer())?;
    Ok(Json(to_json::travelogue_details(details)))
}

#[post("/travelogue/save", format = "application/json", data = "<data>")]
pub fn post_save(
    db: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::SaveTravelogue>,
) -> Result<json::SavedTravelogue> {
    let author = auth.user()?;
    let (id, draft) = from_json::try_travelogue_draft(data?.into_inner())?;
    let travelogue = flows::save_travelogue(&db, author, id, draft)?;
    Ok(Json(json::SavedTravelogue {
        travel_id: travelogue.id.into(),
        status: travelogue.status.into(),
    }))
}

#[post("/travelogue/<id>/submit")]
pub fn post_submit(db: sqlite::Connections, auth: Auth, id: i64) -> Result<json::Travelogue> {
    let travelogue = flows::submit_travelogue(&db, auth.user()?, id.into())?;
    Ok(Json(travelogue.into()))
}

#[delete("/travelogue/<id>")]
pub fn delete_travelogue(db: sqlite::Connections, auth: Auth, id: i64) -> Result<()> {
    flows::delete_own_travelogue(&db, auth.user()?, id.into())?;
    Ok(Json(()))
}

#[post("/travelogue/<id>/like")]
pub fn post_like(
    db: sqlite::Connections,
    notify: &State<Notify>,
    auth: Auth,
    id: i64,
) -> Result<json::LikeToggled> {
    let toggled = flows::toggle_like(&db, &**notify.inner(), auth.user()?, id.into())?;
    Ok(Json(toggled.into()))
}
