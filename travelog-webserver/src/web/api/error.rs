use super::{json_error_response, json_error_response_with_details};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;
use travelog_application::error::{AppError, BError};
pub use travelog_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Invalid request body")]
    Json(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::Json(err.to_string()),
            JsonError::Parse(_str, err) => Self::Json(err.to_string()),
        }
    }
}

fn parameter_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::AccountNotFound | ParameterError::Repo(RepoError::NotFound) => {
            Status::NotFound
        }
        ParameterError::Repo(_) => Status::InternalServerError,
        // Validation failures and conflicts
        _ => Status::BadRequest,
    }
}

fn internal_error<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    err: &dyn std::fmt::Display,
) -> response::Result<'o> {
    error!("Error: {err}");
    json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(BError::Parameter(err))) => {
                let status = parameter_status(&err);
                if status == Status::InternalServerError {
                    return internal_error(req, &err);
                }
                if err.is_conflict() {
                    debug!("Conflict: {err}");
                    return json_error_response_with_details(
                        req,
                        &err,
                        Some("conflict".into()),
                        status,
                    );
                }
                json_error_response(req, &err, status)
            }
            Error::App(AppError::Business(BError::Repo(RepoError::NotFound))) => {
                json_error_response(req, &RepoError::NotFound, Status::NotFound)
            }
            Error::App(err) => internal_error(req, &err),
            Error::Json(details) => {
                debug!("Invalid request body: {details}");
                json_error_response_with_details(
                    req,
                    &"Invalid request body",
                    Some(details),
                    Status::BadRequest,
                )
            }
            Error::Other(err) => internal_error(req, &err),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
