#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub account: &'a str,
    pub nickname: &'a str,
    pub password: &'a str,
    pub avatar: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub gender: i16,
    pub region: Option<&'a str>,
    pub birthday: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub account: String,
    pub nickname: String,
    pub password: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub gender: i16,
    pub region: Option<String>,
    pub birthday: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = admins)]
pub struct NewAdmin<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

#[derive(Queryable)]
pub struct AdminEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Insertable)]
#[diesel(table_name = travelogues)]
pub struct NewTravelogue<'a> {
    pub author_id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub location: &'a str,
    pub start_date: String,
    pub end_date: String,
    pub participants: i64,
    pub expenditure: i64,
    pub video_url: Option<&'a str>,
    pub likes: i64,
    pub status: i16,
    pub rejection_reason: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Mutable columns of a travelogue.
///
/// Neither the author nor the like counter or
/// the creation time are ever updated.
#[derive(AsChangeset)]
#[diesel(table_name = travelogues, treat_none_as_null = true)]
pub struct ChangedTravelogue<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub location: &'a str,
    pub start_date: String,
    pub end_date: String,
    pub participants: i64,
    pub expenditure: i64,
    pub video_url: Option<&'a str>,
    pub status: i16,
    pub rejection_reason: Option<&'a str>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct TravelogueEntity {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub participants: i64,
    pub expenditure: i64,
    pub video_url: Option<String>,
    pub likes: i64,
    pub status: i16,
    pub rejection_reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = travelogue_images)]
pub struct NewTravelogueImage<'a> {
    pub travelogue_id: i64,
    pub url: &'a str,
    pub position: i64,
}

#[derive(Queryable)]
pub struct TravelogueImageEntity {
    pub id: i64,
    pub travelogue_id: i64,
    pub url: String,
    pub position: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub travelogue_id: i64,
    pub action: &'a str,
    pub rejection_reason: Option<&'a str>,
    pub reviewer_id: Option<i64>,
    pub review_time: i64,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: i64,
    pub travelogue_id: i64,
    pub action: String,
    pub rejection_reason: Option<String>,
    pub reviewer_id: Option<i64>,
    pub review_time: i64,
}

#[derive(Insertable)]
#[diesel(table_name = likes)]
pub struct NewLike {
    pub user_id: i64,
    pub travelogue_id: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessage<'a> {
    pub recipient_id: i64,
    pub kind: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub outcome: Option<&'a str>,
    pub travelogue_id: Option<i64>,
    pub from_user: Option<&'a str>,
    pub created_at: i64,
    pub is_read: bool,
}

#[derive(Queryable)]
pub struct MessageEntity {
    pub id: i64,
    pub recipient_id: i64,
    pub kind: String,
    pub title: String,
    pub content: String,
    pub outcome: Option<String>,
    pub travelogue_id: Option<i64>,
    pub from_user: Option<String>,
    pub created_at: i64,
    pub is_read: bool,
}
