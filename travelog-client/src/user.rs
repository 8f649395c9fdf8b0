use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use travelog_boundary::{
    LikeToggled, Message, Page, SaveTravelogue, SavedTravelogue, Travelogue, UpdateProfile, User,
};

use crate::{into_json, util::auth_header_value, FeedQuery, Result};

/// Authorized travelog API of an end user
#[derive(Clone)]
pub struct UserApi {
    http: Client,
    url: String,
    token: String,
}

impl UserApi {
    pub(crate) const fn new(http: Client, url: String, token: String) -> Self {
        Self { http, url, token }
    }
    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = req
            .header("Authorization", auth_header_value(&self.token))
            .send()
            .await?;
        into_json(response).await
    }
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/logout", self.url);
        self.send(self.http.post(url)).await
    }
    pub async fn user_info(&self) -> Result<User> {
        let url = format!("{}/user/info", self.url);
        self.send(self.http.get(url)).await
    }
    pub async fn update_profile(&self, update: &UpdateProfile) -> Result<User> {
        let url = format!("{}/user/info", self.url);
        self.send(self.http.put(url).json(update)).await
    }
    pub async fn travelogue(&self, id: i64) -> Result<Travelogue> {
        let url = format!("{}/travelogue/{id}", self.url);
        self.send(self.http.get(url)).await
    }
    pub async fn my_travelogues(&self, query: &FeedQuery) -> Result<Page<Travelogue>> {
        let url = format!("{}/travelogue/mine", self.url);
        self.send(self.http.get(url).query(query)).await
    }
    pub async fn liked_travelogues(&self, page: u64, limit: u64) -> Result<Page<Travelogue>> {
        let url = format!("{}/travelogue/liked", self.url);
        self.send(self.http.get(url).query(&FeedQuery::page(page, limit)))
            .await
    }
    pub async fn save_travelogue(&self, data: &SaveTravelogue) -> Result<SavedTravelogue> {
        let url = format!("{}/travelogue/save", self.url);
        self.send(self.http.post(url).json(data)).await
    }
    pub async fn submit_travelogue(&self, id: i64) -> Result<Travelogue> {
        let url = format!("{}/travelogue/{id}/submit", self.url);
        self.send(self.http.post(url)).await
    }
    pub async fn delete_travelogue(&self, id: i64) -> Result<()> {
        let url = format!("{}/travelogue/{id}", self.url);
        self.send(self.http.delete(url)).await
    }
    pub async fn toggle_like(&self, id: i64) -> Result<LikeToggled> {
        let url = format!("{}/travelogue/{id}/like", self.url);
        self.send(self.http.post(url)).await
    }
    pub async fn messages(&self, kind: Option<&str>) -> Result<Vec<Message>> {
        let url = format!("{}/message/list", self.url);
        let mut req = self.http.get(url);
        if let Some(kind) = kind {
            req = req.query(&[("kind", kind)]);
        }
        self.send(req).await
    }
    pub async fn mark_message_read(&self, id: i64) -> Result<()> {
        let url = format!("{}/message/{id}/read", self.url);
        self.send(self.http.post(url)).await
    }
    pub async fn mark_all_messages_read(&self) -> Result<()> {
        let url = format!("{}/message/read-all", self.url);
        self.send(self.http.post(url)).await
    }
}
