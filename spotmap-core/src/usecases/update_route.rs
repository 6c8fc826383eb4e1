use super::{create_route::linked_spots, prelude::*};
use crate::authorization;

#[derive(Debug, Clone, Default)]
pub struct UpdateRoute {
    pub name: Option<String>,
    pub description: Option<String>,
    pub distance_km: Option<f64>,
    pub path: Option<Vec<MapPoint>>,
    pub spot_ids: Option<Vec<Id>>,
    pub published: Option<bool>,
}

pub fn update_route<R>(repo: &R, user: &User, id: &Id, u: UpdateRoute) -> Result<Route>
where
    R: RouteRepo + SpotRepo,
{
    let mut route = repo.get_route(id)?;
    authorization::user::authorize_owner(user, &route.created_by)?;
    if let Some(name) = u.name {
        if name.trim().is_empty() {
            return Err(Error::Name);
        }
        route.name = name;
    }
    if let Some(description) = u.description {
        route.description = description;
    }
    if let Some(distance_km) = u.distance_km {
        if !(distance_km.is_finite() && distance_km >= 0.0) {
            return Err(Error::Distance);
        }
        route.distance_km = distance_km;
    }
    if let Some(path) = u.path {
        if path.iter().any(|p| !p.is_valid()) {
            return Err(Error::InvalidPosition);
        }
        route.path = path;
    }
    if let Some(published) = u.published {
        route.published = published;
    }
    // A new spot list fully replaces the ordered links.
    if let Some(spot_ids) = u.spot_ids {
        route.spots = linked_spots(repo, &spot_ids)?;
    }
    repo.update_route(&route)?;
    Ok(route)
}
