use std::collections::BTreeMap;

use strum::{AsRefStr, Display, EnumString};

use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// Named boolean facility flags, e.g. "toilets" or "bbq".
pub type Facilities = BTreeMap<String, bool>;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub pos         : MapPoint,
    pub category    : Category,
    pub facilities  : Facilities,
    pub published   : bool,
    pub created_by  : Id,
    pub created_at  : Timestamp,
    pub photos      : Vec<SpotPhoto>,
    pub tags        : Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotPhoto {
    pub id: Id,
    pub url: String,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Park,
    Garden,
    Walk,
    Lookout,
    Playground,
    Beach,
    #[default]
    Other,
}
