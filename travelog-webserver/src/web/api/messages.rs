use super::*;

#[get("/message/list?<kind>")]
pub fn get_messages(
    db: sqlite::Connections,
    auth: Auth,
    kind: Option<String>,
) -> Result<Vec<json::Message>> {
    let user = auth.user()?;
    let kind = kind
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| k.parse::<MessageKind>().map_err(|_| ParameterError::MessageKind))
        .transpose()?;
    let messages = usecases::list_messages(&db.shared()?, user, kind)?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

#[post("/message/<id>/read")]
pub fn post_read(db: sqlite::Connections, auth: Auth, id: i64) -> Result<()> {
    flows::mark_message_read(&db, auth.user()?, id.into())?;
    Ok(Json(()))
}

#[post("/message/read-all")]
pub fn post_read_all(db: sqlite::Connections, auth: Auth) -> Result<()> {
    flows::mark_all_messages_read(&db, auth.user()?)?;
    Ok(Json(()))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn review_and_like_messages() {
        let (client, db) = setup();
        let admin = admin_login(&client, &db);
        let author = signup(&client, "traveller", "Mia");
        let fan = signup(&client, "another-one", "Leo");
        let id = save_travelogue(&client, &author, "Lijiang", true);
        approve(&client, &admin, id);
        client
            .post(format!("/travelogue/{id}/like"))
            .header(bearer(&fan))
            .dispatch();

        let messages: Vec<json::Message> = client
            .get("/message/list")
            .header(bearer(&author))
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(messages.len(), 2);
        // newest first
        assert_eq!(messages[0].kind, "like");
        assert_eq!(messages[0].from_user.as_deref(), Some("Leo"));
        assert_eq!(messages[1].kind, "review");
        assert_eq!(messages[1].status.as_deref(), Some("approved"));

        let reviews: Vec<json::Message> = client
            .get("/message/list?kind=review")
            .header(bearer(&author))
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(reviews.len(), 1);
        assert!(!reviews[0].is_read);

        let res = client
            .post(format!("/message/{}/read", reviews[0].id))
            .header(bearer(&author))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let reviews: Vec<json::Message> = client
            .get("/message/list?kind=review")
            .header(bearer(&author))
            .dispatch()
            .into_json()
            .unwrap();
        assert!(reviews[0].is_read);

        // nobody else can read them
        let res = client
            .post(format!("/message/{}/read", reviews[0].id))
            .header(bearer(&fan))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let res = client
            .get("/message/list?kind=spam")
            .header(bearer(&author))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn mark_all_messages_read() {
        let (client, db) = setup();
        let admin = admin_login(&client, &db);
        let author = signup(&client, "traveller", "Mia");
        let fan = signup(&client, "another-one", "Leo");
        let id = save_travelogue(&client, &author, "Dali", true);
        approve(&client, &admin, id);
        client
            .post(format!("/travelogue/{id}/like"))
            .header(bearer(&fan))
            .dispatch();
        let own = save_travelogue(&client, &fan, "Erhai", true);
        approve(&client, &admin, own);

        let res = client.post("/message/read-all").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        let res = client
            .post("/message/read-all")
            .header(bearer(&author))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let messages: Vec<json::Message> = client
            .get("/message/list")
            .header(bearer(&author))
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.is_read));
        let messages: Vec<json::Message> = client
            .get("/message/list")
            .header(bearer(&fan))
            .dispatch()
            .into_json()
            .unwrap();
        assert!(!messages[0].is_read);
    }
}
