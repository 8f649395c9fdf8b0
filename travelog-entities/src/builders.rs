pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{travelogue_builder::*, user_builder::*};

pub mod travelogue_builder {

    use super::*;
    use crate::{id::*, image::*, status::*, time::Timestamp, travelogue::*};
    use time::{macros::date, Date};

    #[derive(Debug)]
    pub struct TravelogueBuild {
        travelogue: Travelogue,
    }

    impl TravelogueBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.travelogue.id = id.into();
            self
        }
        pub fn author(mut self, author: i64) -> Self {
            self.travelogue.author = author.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.travelogue.title = title.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.travelogue.content = content.into();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.travelogue.location = location.into();
            self
        }
        pub fn dates(mut self, start: Date, end: Date) -> Self {
            self.travelogue.start_date = start;
            self.travelogue.end_date = end;
            self
        }
        pub fn images(mut self, urls: Vec<&str>) -> Self {
            self.travelogue.images = ordered_images(urls);
            self
        }
        pub fn likes(mut self, likes: u64) -> Self {
            self.travelogue.likes = likes;
            self
        }
        pub fn status(mut self, status: TravelogueStatus) -> Self {
            self.travelogue.status = status;
            self
        }
        pub fn rejection_reason(mut self, reason: Option<&str>) -> Self {
            self.travelogue.rejection_reason = reason.map(Into::into);
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.travelogue.created_at = at;
            self.travelogue.updated_at = at;
            self
        }
        pub fn finish(self) -> Travelogue {
            self.travelogue
        }
    }

    impl Builder for Travelogue {
        type Build = TravelogueBuild;
        fn build() -> TravelogueBuild {
            TravelogueBuild {
                travelogue: Travelogue {
                    id: TravelId::new(1),
                    author: UserId::new(1),
                    title: "A trip".into(),
                    content: "".into(),
                    location: "Somewhere".into(),
                    start_date: date!(2024 - 01 - 01),
                    end_date: date!(2024 - 01 - 03),
                    participants: 1,
                    expenditure: 0,
                    video_url: None,
                    images: vec![],
                    likes: 0,
                    status: TravelogueStatus::default(),
                    rejection_reason: None,
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, time::Timestamp, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn account(mut self, account: &str) -> Self {
            self.user.account = account.into();
            self
        }
        pub fn nickname(mut self, nickname: &str) -> Self {
            self.user.nickname = nickname.into();
            self
        }
        pub fn password(mut self, pw: &str) -> Self {
            self.user.password = pw.parse().unwrap();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: UserId::new(1),
                    account: "traveller".into(),
                    nickname: "Traveller".into(),
                    password: Password::from_hash(String::new()),
                    avatar: None,
                    profile: Profile::default(),
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}
