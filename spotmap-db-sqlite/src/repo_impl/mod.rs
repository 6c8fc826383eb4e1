use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use spotmap_core::{
    entities::{
        email::EmailAddress,
        geo::{MapBbox, MapPoint},
        id::Id,
        report::{AuditLogEntry, Report, ReportStatus},
        route::{Route, RouteSpot},
        spot::{Spot, SpotPhoto},
        tag::Tag,
        time::Timestamp,
        user::User,
        vote::{Favourite, Vote},
    },
    repositories::{self as repo, *},
};

use super::*;

mod favourite;
mod report;
mod route;
mod spot;
mod tag;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}
