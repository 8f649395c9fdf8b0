use reqwest::Client;
use serde::Serialize;
use travelog_boundary::{
    AdminCredentials, AdminSession, Credentials, NewUser, Page, Travelogue, TravelogueStatus,
    UserSession,
};

use crate::{into_json, AdminApi, ClientConfig, Result, UserApi};

/// Query string of the list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TravelogueStatus>,
    /// Nickname or user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl FeedQuery {
    pub fn page(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Public travelog API
#[derive(Clone)]
pub struct PublicApi {
    http: Client,
    url: String,
}

impl PublicApi {
    pub fn new(cfg: &ClientConfig) -> Self {
        Self::with_client(Client::new(), cfg)
    }
    pub fn with_client(http: Client, cfg: &ClientConfig) -> Self {
        Self {
            http,
            url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }
    pub fn user(&self, token: impl Into<String>) -> UserApi {
        UserApi::new(self.http.clone(), self.url.clone(), token.into())
    }
    pub fn admin(&self, token: impl Into<String>) -> AdminApi {
        AdminApi::new(self.http.clone(), self.url.clone(), token.into())
    }
    pub async fn signup(&self, new_user: &NewUser) -> Result<UserSession> {
        let url = format!("{}/signup", self.url);
        let response = self.http.post(url).json(new_user).send().await?;
        into_json(response).await
    }
    pub async fn login(&self, credentials: &Credentials) -> Result<UserSession> {
        let url = format!("{}/login", self.url);
        let response = self.http.post(url).json(credentials).send().await?;
        into_json(response).await
    }
    pub async fn admin_login(&self, credentials: &AdminCredentials) -> Result<AdminSession> {
        let url = format!("{}/admin/login", self.url);
        let response = self.http.post(url).json(credentials).send().await?;
        into_json(response).await
    }
    pub async fn feed(&self, query: &FeedQuery) -> Result<Page<Travelogue>> {
        let url = format!("{}/travelogue/list", self.url);
        let response = self.http.get(url).query(query).send().await?;
        into_json(response).await
    }
    pub async fn search(&self, keyword: &str, page: u64, limit: u64) -> Result<Page<Travelogue>> {
        let url = format!("{}/travelogue/search", self.url);
        let query = FeedQuery {
            keyword: Some(keyword.to_string()),
            ..FeedQuery::page(page, limit)
        };
        let response = self.http.get(url).query(&query).send().await?;
        into_json(response).await
    }
    /// Anonymous view; use [`UserApi::travelogue`] to see own drafts.
    pub async fn travelogue(&self, id: i64) -> Result<Travelogue> {
        let url = format!("{}/travelogue/{id}", self.url);
        let response = self.http.get(url).send().await?;
        into_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_query_omits_unset_parameters() {
        let query = FeedQuery {
            status: Some(TravelogueStatus::Published),
            sort_by: Some("likes".into()),
            ..FeedQuery::page(2, 10)
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "page": 2, "limit": 10, "status": "published", "sort_by": "likes" })
        );
    }

    #[test]
    fn trailing_slash_of_base_url_is_ignored() {
        let cfg = ClientConfig {
            base_url: "http://example.org/api/".into(),
            ..Default::default()
        };
        assert_eq!(PublicApi::new(&cfg).url, "http://example.org/api");
    }
}
