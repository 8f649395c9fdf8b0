pub mod prelude {
    use time::macros::date;

    pub use travelog_core::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn default_draft(submit: bool) -> usecases::TravelogueDraft {
        usecases::TravelogueDraft {
            title: "Three days in Kyoto".into(),
            content: "Temples, tea and trains.".into(),
            location: "Kyoto".into(),
            start_date: date!(2024 - 04 - 01),
            end_date: date!(2024 - 04 - 03),
            participants: 2,
            expenditure: 3000,
            video_url: None,
            images: vec!["https://img.example.com/kyoto.jpg".into()],
            submit,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: flows::InboxNotifier,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            travelog_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            let notify = flows::InboxNotifier::new(db_connections.clone());
            Self {
                db_connections,
                notify,
            }
        }

        pub fn create_user(&self, account: &str, nickname: &str) -> User {
            flows::register_user(
                &self.db_connections,
                usecases::NewUser {
                    nickname: nickname.into(),
                    account: account.into(),
                    password: "secret1".into(),
                },
            )
            .unwrap()
        }

        pub fn create_travelogue(&self, author: UserId, submit: bool) -> TravelId {
            flows::save_travelogue(&self.db_connections, author, None, default_draft(submit))
                .unwrap()
                .id
        }

        pub fn create_published_travelogue(&self, author: UserId) -> TravelId {
            let id = self.create_travelogue(author, true);
            let db = self.db_connections.exclusive().unwrap();
            usecases::review_travelogue(
                &db,
                id,
                usecases::Review {
                    action: ReviewAction::Approve,
                    reason: None,
                    reviewer: None,
                },
            )
            .unwrap();
            id
        }

        pub fn get_travelogue(&self, id: TravelId) -> Travelogue {
            self.db_connections
                .shared()
                .unwrap()
                .get_travelogue(id)
                .unwrap()
        }

        pub fn review_history(&self, id: TravelId) -> Vec<ReviewRecord> {
            usecases::review_history(&self.db_connections.shared().unwrap(), id).unwrap()
        }

        pub fn messages_of(&self, user: UserId) -> Vec<Message> {
            usecases::list_messages(&self.db_connections.shared().unwrap(), user, None).unwrap()
        }
    }
}
