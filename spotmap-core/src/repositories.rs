// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::{
    email::EmailAddress,
    geo::{MapBbox, MapPoint},
    id::Id,
    report::{AuditLogEntry, Report},
    route::Route,
    spot::{Category, Spot},
    tag::Tag,
    user::User,
    vote::{Favourite, Vote},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Spatial restriction of a spot search.
///
/// At most one mode applies per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialFilter {
    Bbox(MapBbox),
    Radius { center: MapPoint, radius_km: f64 },
}

#[derive(Debug, Default, Clone)]
pub struct SpotQuery {
    pub spatial: Option<SpatialFilter>,
    pub text: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub pagination: Pagination,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}

pub trait SpotRepo {
    // Persists the spot together with its photos and tag links.
    fn create_spot(&self, spot: &Spot) -> Result<()>;
    // Replaces the spot row and all of its photos and tag links.
    fn update_spot(&self, spot: &Spot) -> Result<()>;
    fn delete_spot(&self, id: &Id) -> Result<()>;

    fn get_spot(&self, id: &Id) -> Result<Spot>;
    fn query_spots(&self, query: &SpotQuery) -> Result<Vec<Spot>>;

    fn count_spots(&self) -> Result<usize>;
}

pub trait TagRepo {
    fn create_tag_if_it_does_not_exist(&self, _: &Tag) -> Result<()>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
    fn count_tags(&self) -> Result<usize>;
}

pub trait RouteRepo {
    fn create_route(&self, route: &Route) -> Result<()>;
    // Replaces the route row and all of its ordered spot links.
    fn update_route(&self, route: &Route) -> Result<()>;
    fn delete_route(&self, id: &Id) -> Result<()>;

    fn get_route(&self, id: &Id) -> Result<Route>;
    fn all_routes(&self) -> Result<Vec<Route>>;
}

pub trait FavouriteRepo {
    fn add_favourite(&self, favourite: &Favourite) -> Result<()>;
    fn remove_favourite(&self, user_id: &Id, spot_id: &Id) -> Result<()>;
    fn favourite_spot_ids(&self, user_id: &Id) -> Result<Vec<Id>>;
}

pub trait VoteRepo {
    // Insert-or-update keyed by (user, spot); last write wins.
    fn upsert_vote(&self, vote: &Vote) -> Result<()>;
    // Sum of all vote values for the spot.
    fn spot_score(&self, spot_id: &Id) -> Result<i64>;
}

pub trait ReportRepo {
    fn create_report(&self, report: &Report) -> Result<()>;
    fn update_report(&self, report: &Report) -> Result<()>;

    fn get_report(&self, id: &Id) -> Result<Report>;
    fn all_reports(&self) -> Result<Vec<Report>>;
    fn pending_reports(&self) -> Result<Vec<Report>>;
}

pub trait AuditLogRepo {
    fn append_audit_log_entry(&self, entry: &AuditLogEntry) -> Result<()>;
    fn audit_log_of_report(&self, report_id: &Id) -> Result<Vec<AuditLogEntry>>;
}
