use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, SameSite, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use spotmap_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::web::{jwt, sqlite, Cfg};
use spotmap_application::prelude as flows;
use spotmap_boundary as json;
use spotmap_core::usecases;

mod error;
mod favourites;
mod reports;
mod routes;
mod spots;
mod tags;
mod uploads;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_register,
        users::post_login,
        users::post_logout,
        users::post_verify_email,
        users::post_request_password_reset,
        users::post_reset_password,
        // ---   uploads   --- //
        uploads::post_presign,
        // ---   spots   --- //
        spots::post_spot,
        spots::get_spot,
        spots::get_spots,
        spots::put_spot,
        spots::delete_spot,
        spots::post_vote,
        // ---   routes   --- //
        routes::post_route,
        routes::get_route,
        routes::get_routes,
        routes::put_route,
        routes::delete_route,
        // ---   tags   --- //
        tags::get_tags,
        tags::post_tag,
        // ---   favourites   --- //
        favourites::get_favourites,
        favourites::post_favourite,
        favourites::delete_favourite,
        // ---   reports   --- //
        reports::post_report,
        reports::get_reports,
        reports::get_moderation_queue,
        reports::post_resolve_report,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse { message };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
