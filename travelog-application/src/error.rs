use thiserror::Error;
use travelog_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use travelog_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<travelog_entities::password::ParseError> for AppError {
    fn from(_: travelog_entities::password::ParseError) -> Self {
        BError::Parameter(ParameterError::Password).into()
    }
}
