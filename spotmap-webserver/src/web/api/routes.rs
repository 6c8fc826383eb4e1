use super::*;
use spotmap_core::entities::{geo::MapPoint, id::Id};

fn path_points(path: &[[f64; 2]]) -> Vec<MapPoint> {
    // GeoJSON order: [lng, lat]
    path.iter()
        .map(|p| MapPoint::from_lat_lng_deg(p[1], p[0]))
        .collect()
}

#[post("/routes", format = "application/json", data = "<new_route>")]
pub fn post_route(
    db: sqlite::Connections,
    auth: Auth,
    new_route: JsonResult<json::NewRoute>,
) -> Result<json::Route> {
    let user = auth.user(&db.shared()?)?;
    let new_route = new_route?.into_inner();
    let new_route = usecases::NewRoute {
        name: new_route.name,
        description: new_route.description.unwrap_or_default(),
        distance_km: new_route.distance_km.unwrap_or(0.0),
        path: path_points(&new_route.path),
        spot_ids: new_route
            .spot_ids
            .unwrap_or_default()
            .into_iter()
            .map(Id::from)
            .collect(),
        published: new_route.is_published.unwrap_or(true),
    };
    let route = flows::create_route(&db, &user, new_route)?;
    Ok(Json(route.into()))
}

#[get("/routes/<id>", format = "application/json")]
pub fn get_route(db: sqlite::Connections, _account: Account, id: String) -> Result<json::Route> {
    let route = flows::get_route(&db, &id.into())?;
    Ok(Json(route.into()))
}

#[get("/routes", format = "application/json")]
pub fn get_routes(db: sqlite::Connections, _account: Account) -> Result<Vec<json::Route>> {
    let routes = flows::all_routes(&db)?;
    Ok(Json(routes.into_iter().map(Into::into).collect()))
}

#[put("/routes/<id>", format = "application/json", data = "<update>")]
pub fn put_route(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    update: JsonResult<json::UpdateRoute>,
) -> Result<json::Route> {
    let user = auth.user(&db.shared()?)?;
    let update = update?.into_inner();
    let update = usecases::UpdateRoute {
        name: update.name,
        description: update.description,
        distance_km: update.distance_km,
        path: update.path.as_deref().map(path_points),
        spot_ids: update
            .spot_ids
            .map(|ids| ids.into_iter().map(Id::from).collect()),
        published: update.is_published,
    };
    let route = flows::update_route(&db, &user, &id.into(), update)?;
    Ok(Json(route.into()))
}

#[delete("/routes/<id>")]
pub fn delete_route(db: sqlite::Connections, auth: Auth, id: String) -> Result<json::Success> {
    let user = auth.user(&db.shared()?)?;
    flows::delete_route(&db, &user, &id.into())?;
    Ok(Json(json::Success { success: true }))
}
