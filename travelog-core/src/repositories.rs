// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Likes,
    StartDate,
    Expenditure,
}

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorFilter {
    Id(UserId),
    Nickname(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelogueQuery {
    // status = None: all existing travelogues, deleted
    //                ones are never included
    pub status: Option<TravelogueStatus>,
    pub author: Option<AuthorFilter>,
    // Case-insensitive substring of the title or the nickname of the author
    pub keyword: Option<String>,
    pub liked_by: Option<UserId>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

pub trait TravelogueRepo {
    // The id of the given travelogue is ignored, a new one is assigned
    fn create_travelogue(&self, travelogue: &Travelogue) -> Result<TravelId>;
    // Replaces all fields except the author, the like counter and
    // the creation time. Images are replaced as a whole.
    fn update_travelogue(&self, travelogue: &Travelogue) -> Result<()>;

    // Includes deleted travelogues
    fn get_travelogue(&self, id: TravelId) -> Result<Travelogue>;
    fn get_travelogue_with_author(&self, id: TravelId) -> Result<(Travelogue, AuthorInfo)>;

    // Returns the requested page and the total number of matches
    fn query_travelogues(
        &self,
        query: &TravelogueQuery,
        pagination: &Pagination,
    ) -> Result<(Vec<(Travelogue, AuthorInfo)>, u64)>;

    fn count_travelogues_by_status(&self) -> Result<Vec<(TravelogueStatus, u64)>>;
}

pub trait ReviewRepo {
    fn add_review_record(&self, record: &NewReviewRecord) -> Result<ReviewId>;
    // Oldest first
    fn load_review_records(&self, travelogue: TravelId) -> Result<Vec<ReviewRecord>>;
}

pub trait LikeRepo {
    // Flips the relation and adjusts the counter of the travelogue
    // accordingly. The counter never drops below zero.
    fn toggle_like(&self, user: UserId, travelogue: TravelId) -> Result<LikeToggled>;
    fn is_liked_by(&self, user: UserId, travelogue: TravelId) -> Result<bool>;
}

pub trait UserRepo {
    // The id of the given user is ignored, a new one is assigned
    fn create_user(&self, user: &User) -> Result<UserId>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: UserId) -> Result<User>;
    fn try_get_user_by_account(&self, account: &str) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait AdminRepo {
    fn create_admin(&self, admin: &Admin) -> Result<AdminId>;
    fn get_admin(&self, id: AdminId) -> Result<Admin>;
    fn try_get_admin_by_username(&self, username: &str) -> Result<Option<Admin>>;
}

pub trait MessageRepo {
    fn create_message(&self, message: &NewMessage) -> Result<MessageId>;
    // Newest first
    fn messages_of_user(&self, user: UserId, kind: Option<MessageKind>) -> Result<Vec<Message>>;
    // Only messages of the given recipient can be marked
    fn mark_message_read(&self, user: UserId, id: MessageId) -> Result<()>;
    // Returns the number of messages that were unread
    fn mark_all_messages_read(&self, user: UserId) -> Result<u64>;
}
