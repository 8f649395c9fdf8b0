use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Login required")]
    AuthRequired { login_url: String },

    #[error("{0}")]
    Fetch(String),

    #[error("{0:?}")]
    Api(#[from] travelog_boundary::Error),

    #[error("Local storage: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(format!("{err}"))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{err}"))
    }
}
