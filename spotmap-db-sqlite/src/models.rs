// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use num_traits::{FromPrimitive as _, ToPrimitive as _};

use spotmap_core::entities::{
    email::EmailAddress,
    report::{AuditLogEntry, ModerationAction, Report, ReportStatus},
    time::Timestamp,
    user::{Role, User},
    vote::{Favourite, Vote},
};

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub email_confirmed: bool,
    pub password: &'a str,
    pub role: i16,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        Self {
            id: from.id.as_str(),
            email: from.email.as_str(),
            email_confirmed: from.email_confirmed,
            password: from.password.as_ref(),
            role: from.role.to_i16().unwrap_or_default(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub email_confirmed: bool,
    pub password: String,
    pub role: i16,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            email,
            email_confirmed,
            password,
            role,
        } = from;
        Self {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
            email_confirmed,
            password: password.into(),
            role: Role::from_i16(role).unwrap_or_default(),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = spots)]
pub struct NewSpot<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub category: &'a str,
    pub facilities: String,
    pub published: bool,
    pub created_by: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct SpotEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    pub facilities: String,
    pub published: bool,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = spot_photos)]
pub struct NewSpotPhoto<'a> {
    pub id: &'a str,
    pub spot_id: &'a str,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct SpotPhotoEntity {
    pub id: String,
    pub spot_id: String,
    pub url: String,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = tags)]
pub struct TagEntity {
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = spot_tags)]
pub struct NewSpotTag<'a> {
    pub spot_id: &'a str,
    pub tag_name: &'a str,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = routes)]
pub struct NewRoute<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub distance_km: f64,
    pub path: String,
    pub published: bool,
    pub created_by: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct RouteEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub distance_km: f64,
    pub path: String,
    pub published: bool,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = route_spots)]
pub struct NewRouteSpot<'a> {
    pub route_id: &'a str,
    pub position: i32,
    pub spot_id: &'a str,
}

#[derive(Queryable)]
pub struct RouteSpotEntity {
    pub route_id: String,
    pub position: i32,
    pub spot_id: String,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = favourites)]
pub struct FavouriteEntity {
    pub user_id: String,
    pub spot_id: String,
}

impl From<&Favourite> for FavouriteEntity {
    fn from(from: &Favourite) -> Self {
        Self {
            user_id: from.user_id.to_string(),
            spot_id: from.spot_id.to_string(),
        }
    }
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = votes)]
pub struct VoteEntity {
    pub user_id: String,
    pub spot_id: String,
    pub value: i16,
}

impl From<&Vote> for VoteEntity {
    fn from(from: &Vote) -> Self {
        Self {
            user_id: from.user_id.to_string(),
            spot_id: from.spot_id.to_string(),
            value: i16::from(from.value.as_i8()),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = reports)]
pub struct NewReport<'a> {
    pub id: &'a str,
    pub spot_id: &'a str,
    pub reason: &'a str,
    pub status: i16,
    pub created_at: i64,
}

impl<'a> From<&'a Report> for NewReport<'a> {
    fn from(from: &'a Report) -> Self {
        Self {
            id: from.id.as_str(),
            spot_id: from.spot_id.as_str(),
            reason: &from.reason,
            status: from.status.to_i16().unwrap_or_default(),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct ReportEntity {
    pub id: String,
    pub spot_id: String,
    pub reason: String,
    pub status: i16,
    pub created_at: i64,
}

impl From<ReportEntity> for Report {
    fn from(from: ReportEntity) -> Self {
        let ReportEntity {
            id,
            spot_id,
            reason,
            status,
            created_at,
        } = from;
        Self {
            id: id.into(),
            spot_id: spot_id.into(),
            reason,
            status: ReportStatus::from_i16(status).unwrap_or_default(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = audit_log)]
pub struct NewAuditLogEntry<'a> {
    pub id: &'a str,
    pub report_id: &'a str,
    pub user_id: &'a str,
    pub action: i16,
    pub created_at: i64,
}

impl<'a> From<&'a AuditLogEntry> for NewAuditLogEntry<'a> {
    fn from(from: &'a AuditLogEntry) -> Self {
        Self {
            id: from.id.as_str(),
            report_id: from.report_id.as_str(),
            user_id: from.user_id.as_str(),
            action: from.action.to_i16().unwrap_or_default(),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct AuditLogEntity {
    pub id: String,
    pub report_id: String,
    pub user_id: String,
    pub action: i16,
    pub created_at: i64,
}

impl From<AuditLogEntity> for AuditLogEntry {
    fn from(from: AuditLogEntity) -> Self {
        let AuditLogEntity {
            id,
            report_id,
            user_id,
            action,
            created_at,
        } = from;
        Self {
            id: id.into(),
            report_id: report_id.into(),
            user_id: user_id.into(),
            action: ModerationAction::from_i16(action)
                .unwrap_or(ModerationAction::Reject),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}
