use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use travelog_boundary::{Admin, Page, ReviewRecord, ReviewRequest, Statistics, Travelogue};

use crate::{into_json, util::auth_header_value, FeedQuery, Result};

pub const ADMIN_ID_HEADER: &str = "X-Admin-Id";

/// Authorized travelog API of an administrator
#[derive(Clone)]
pub struct AdminApi {
    http: Client,
    url: String,
    token: String,
    admin_id: Option<i64>,
}

impl AdminApi {
    pub(crate) const fn new(http: Client, url: String, token: String) -> Self {
        Self {
            http,
            url,
            token,
            admin_id: None,
        }
    }
    /// Additionally send the id of the logged in administrator.
    #[must_use]
    pub fn with_admin_id(mut self, admin_id: i64) -> Self {
        self.admin_id = Some(admin_id);
        self
    }
    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut req = req.header("Authorization", auth_header_value(&self.token));
        if let Some(id) = self.admin_id {
            req = req.header(ADMIN_ID_HEADER, id.to_string());
        }
        into_json(req.send().await?).await
    }
    pub async fn info(&self) -> Result<Admin> {
        let url = format!("{}/admin/info", self.url);
        self.send(self.http.get(url)).await
    }
    pub async fn travelogues(&self, query: &FeedQuery) -> Result<Page<Travelogue>> {
        let url = format!("{}/admin/travelogue", self.url);
        self.send(self.http.get(url).query(query)).await
    }
    pub async fn review(&self, id: i64, review: &ReviewRequest) -> Result<Travelogue> {
        let url = format!("{}/admin/travelogue/{id}/review", self.url);
        self.send(self.http.post(url).json(review)).await
    }
    pub async fn approve(&self, id: i64) -> Result<Travelogue> {
        let review = ReviewRequest {
            action: Some("approve".into()),
            ..Default::default()
        };
        self.review(id, &review).await
    }
    pub async fn reject(&self, id: i64, reason: &str) -> Result<Travelogue> {
        let review = ReviewRequest {
            action: Some("reject".into()),
            reason: Some(reason.into()),
            ..Default::default()
        };
        self.review(id, &review).await
    }
    pub async fn reviews(&self, id: i64) -> Result<Vec<ReviewRecord>> {
        let url = format!("{}/admin/travelogue/{id}/reviews", self.url);
        self.send(self.http.get(url)).await
    }
    pub async fn statistics(&self) -> Result<Statistics> {
        let url = format!("{}/admin/statistics", self.url);
        self.send(self.http.get(url)).await
    }
}
