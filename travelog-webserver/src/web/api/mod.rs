use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, FromForm, Route, State,
};
use travelog_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite, Cfg},
};
use travelog_application::prelude as flows;
use travelog_core::usecases::Error as ParameterError;

mod admin;
mod error;
mod messages;
mod travelogues;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_signup,
        users::post_login,
        users::post_logout,
        users::get_user_info,
        users::put_user_info,
        // ---   travelogues   --- //
        travelogues::get_list,
        travelogues::get_search,
        travelogues::get_mine,
        travelogues::get_liked,
        travelogues::get_travelogue,
        travelogues::post_save,
        travelogues::post_submit,
        travelogues::delete_travelogue,
        travelogues::post_like,
        // ---   messages   --- //
        messages::get_messages,
        messages::post_read,
        messages::post_read_all,
        // ---   admin   --- //
        admin::post_login,
        admin::get_admin_info,
        admin::get_travelogues,
        admin::post_review,
        admin::get_reviews,
        admin::get_statistics,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    json_error_response_with_details(req, err, None, status)
}

fn json_error_response_with_details<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    details: Option<String>,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message: err.to_string(),
        details,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Query parameters of paginated travelogue lists.
#[derive(Debug, Default, FromForm)]
pub struct FeedParams {
    page: Option<u64>,
    #[field(name = "limit")]
    #[field(name = "pageSize")]
    limit: Option<u64>,
    status: Option<String>,
    author: Option<String>,
    keyword: Option<String>,
    #[field(name = "sort_by")]
    #[field(name = "sortBy")]
    sort_by: Option<String>,
    order: Option<String>,
}

impl FeedParams {
    fn try_into_request(self) -> result::Result<usecases::FeedRequest, ParameterError> {
        let Self {
            page,
            limit,
            status,
            author,
            keyword,
            sort_by,
            order,
        } = self;
        let status = status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(from_json::try_status)
            .transpose()?;
        let sort_by = sort_by
            .as_deref()
            .map(usecases::parse_sort_field)
            .transpose()?
            .unwrap_or_default();
        let order = order
            .as_deref()
            .map(usecases::parse_sort_order)
            .transpose()?
            .unwrap_or_default();
        let query = TravelogueQuery {
            status,
            author: author.as_deref().and_then(usecases::parse_author_filter),
            keyword,
            liked_by: None,
            sort_by,
            order,
        };
        Ok(usecases::FeedRequest { query, page, limit })
    }
}
