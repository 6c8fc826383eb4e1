use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewRoute {
    pub name: String,
    pub description: String,
    pub distance_km: f64,
    pub path: Vec<MapPoint>,
    pub spot_ids: Vec<Id>,
    pub published: bool,
}

pub fn create_route<R>(repo: &R, created_by: &Id, r: NewRoute) -> Result<Route>
where
    R: RouteRepo + SpotRepo,
{
    if r.name.trim().is_empty() {
        return Err(Error::Name);
    }
    if !(r.distance_km.is_finite() && r.distance_km >= 0.0) {
        return Err(Error::Distance);
    }
    if r.path.iter().any(|p| !p.is_valid()) {
        return Err(Error::InvalidPosition);
    }
    let spots = linked_spots(repo, &r.spot_ids)?;
    let route = Route {
        id: Id::new(),
        name: r.name,
        description: r.description,
        distance_km: r.distance_km,
        path: r.path,
        published: r.published,
        created_by: created_by.clone(),
        created_at: Timestamp::now(),
        spots,
    };
    log::debug!("Creating new route: id = {}", route.id);
    repo.create_route(&route)?;
    Ok(route)
}

// Checks that all referenced spots exist and assigns the
// contiguous zero-based link order.
pub(super) fn linked_spots<R: SpotRepo>(repo: &R, spot_ids: &[Id]) -> Result<Vec<RouteSpot>> {
    let mut spots = Vec::with_capacity(spot_ids.len());
    for (position, spot_id) in spot_ids.iter().enumerate() {
        repo.get_spot(spot_id)?;
        spots.push(RouteSpot {
            spot_id: spot_id.clone(),
            position: position as u32,
        });
    }
    Ok(spots)
}
