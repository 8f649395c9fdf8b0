pub mod prelude {

    use crate::web::{api, sqlite, tests::rocket_test_setup};

    pub use crate::{
        adapters::json,
        web::tests::prelude::{LocalResponse as Response, *},
    };

    pub const ADMIN_PASSWORD: &str = "admin-secret";

    pub fn setup() -> (Client, sqlite::Connections) {
        rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }

    /// Registers a new user and returns the session token.
    pub fn signup(client: &Client, account: &str, nickname: &str) -> String {
        let res = client
            .post("/signup")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"nickname":"{nickname}","account":"{account}","password":"secret1"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        res.into_json::<json::UserSession>().unwrap().token
    }

    pub fn create_admin(db: &sqlite::Connections, username: &str, password: &str) {
        travelog_application::prelude::create_admin(db, username, password).unwrap();
    }

    /// Creates an admin and returns the session token.
    pub fn admin_login(client: &Client, db: &sqlite::Connections) -> String {
        create_admin(db, "admin", ADMIN_PASSWORD);
        let res = client
            .post("/admin/login")
            .header(ContentType::JSON)
            .body(format!(r#"{{"username":"admin","password":"{ADMIN_PASSWORD}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        res.into_json::<json::AdminSession>().unwrap().token
    }

    pub fn save_travelogue(client: &Client, token: &str, title: &str, submit: bool) -> i64 {
        let res = client
            .post("/travelogue/save")
            .header(ContentType::JSON)
            .header(bearer(token))
            .body(format!(
                r#"{{
                    "title":"{title}",
                    "content":"Old town, rain and noodles.",
                    "images":["https://img.example.com/1.jpg","https://img.example.com/2.jpg"],
                    "location":"Yunnan",
                    "start_date":"2024-05-01",
                    "end_date":"2024-05-04",
                    "participants":2,
                    "expenditure":3500,
                    "submit":{submit}
                }}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        res.into_json::<json::SavedTravelogue>().unwrap().travel_id
    }

    pub fn approve(client: &Client, admin: &str, id: i64) {
        let res = client
            .post(format!("/admin/travelogue/{id}/review"))
            .header(ContentType::JSON)
            .header(bearer(admin))
            .body(r#"{"action":"approve"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }
}
