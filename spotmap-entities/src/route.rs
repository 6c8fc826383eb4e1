use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// An ordered sequence of spots forming a path, with an
/// associated line geometry.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub distance_km : f64,
    pub path        : Vec<MapPoint>,
    pub published   : bool,
    pub created_by  : Id,
    pub created_at  : Timestamp,
    pub spots       : Vec<RouteSpot>,
}

/// A link between a route and a spot.
///
/// `position` values of a route form a contiguous zero-based sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpot {
    pub spot_id: Id,
    pub position: u32,
}

impl Route {
    pub fn has_contiguous_spot_order(&self) -> bool {
        self.spots
            .iter()
            .enumerate()
            .all(|(i, s)| s.position == i as u32)
    }
}
