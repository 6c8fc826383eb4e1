use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id         : Id,
    pub spot_id    : Id,
    pub reason     : String,
    pub status     : ReportStatus,
    pub created_at : Timestamp,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ModerationAction {
    Approve = 0,
    Reject = 1,
}

/// Append-only record of a moderation decision.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id         : Id,
    pub report_id  : Id,
    pub user_id    : Id,
    pub action     : ModerationAction,
    pub created_at : Timestamp,
}
