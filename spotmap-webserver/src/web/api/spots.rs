use rocket::form::FromForm;

use super::*;
use spotmap_core::entities::{
    geo::{MapBbox, MapPoint},
    spot::Category,
};

#[post("/spots", format = "application/json", data = "<new_spot>")]
pub fn post_spot(
    db: sqlite::Connections,
    auth: Auth,
    new_spot: JsonResult<json::NewSpot>,
) -> Result<json::SpotCreated> {
    let user = auth.user(&db.shared()?)?;
    let new_spot = new_spot?.into_inner();
    let new_spot = usecases::NewSpot {
        name: new_spot.name,
        description: new_spot.description.unwrap_or_default(),
        lat: new_spot.lat,
        lng: new_spot.lng,
        category: new_spot.category.into(),
        facilities: new_spot.facilities.unwrap_or_default(),
        published: new_spot.is_published.unwrap_or(true),
        photo_urls: new_spot.photos.unwrap_or_default(),
        tags: new_spot.tags.unwrap_or_default(),
    };
    let spot = flows::create_spot(&db, &user, new_spot)?;
    Ok(Json(json::SpotCreated { id: spot.id.into() }))
}

#[get("/spots/<id>", format = "application/json")]
pub fn get_spot(db: sqlite::Connections, _account: Account, id: String) -> Result<json::Spot> {
    let spot = flows::get_spot(&db, &id.into())?;
    Ok(Json(spot.into()))
}

#[derive(Debug, FromForm)]
pub struct SearchQuery {
    q: Option<String>,
    /// Comma-separated tag names
    tags: Option<String>,
    /// `minLng,minLat,maxLng,maxLat`
    bbox: Option<String>,
    /// `lng,lat`
    center: Option<String>,
    /// Radius around `center` in kilometers
    radius: Option<f64>,
    category: Option<String>,
    page: Option<u64>,
    #[field(name = "pageSize")]
    page_size: Option<u64>,
}

fn parse_bbox(s: &str) -> std::result::Result<MapBbox, ApiError> {
    let coords: Vec<f64> = s.split(',').filter_map(|c| c.trim().parse().ok()).collect();
    let [min_lng, min_lat, max_lng, max_lat] = coords.as_slice() else {
        return Err(usecases::Error::Bbox.into());
    };
    Ok(MapBbox::new(
        MapPoint::from_lat_lng_deg(*min_lat, *min_lng),
        MapPoint::from_lat_lng_deg(*max_lat, *max_lng),
    ))
}

fn parse_center(s: &str) -> std::result::Result<MapPoint, ApiError> {
    let coords: Vec<f64> = s.split(',').filter_map(|c| c.trim().parse().ok()).collect();
    let [lng, lat] = coords.as_slice() else {
        return Err(usecases::Error::InvalidPosition.into());
    };
    Ok(MapPoint::from_lat_lng_deg(*lat, *lng))
}

fn parse_category(s: &str) -> std::result::Result<Category, ApiError> {
    s.parse().map_err(|_| {
        ApiError::OtherWithStatus(
            anyhow::anyhow!("Unknown category: {s}"),
            rocket::http::Status::BadRequest,
        )
    })
}

#[get("/spots?<query..>", format = "application/json")]
pub fn get_spots(
    db: sqlite::Connections,
    _account: Account,
    query: SearchQuery,
) -> Result<Vec<json::Spot>> {
    let bbox = query.bbox.as_deref().map(parse_bbox).transpose()?;
    let center = query.center.as_deref().map(parse_center).transpose()?;
    let category = query.category.as_deref().map(parse_category).transpose()?;
    let tags = query
        .tags
        .as_deref()
        .map(|t| {
            t.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();
    let req = usecases::SpotSearchRequest {
        text: query.q,
        category,
        tags,
        bbox,
        center,
        radius_km: query.radius,
        page: query.page,
        page_size: query.page_size,
    };
    let spots = flows::query_spots(&db, req)?;
    Ok(Json(spots.into_iter().map(Into::into).collect()))
}

#[put("/spots/<id>", format = "application/json", data = "<update>")]
pub fn put_spot(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    update: JsonResult<json::UpdateSpot>,
) -> Result<json::Spot> {
    let user = auth.user(&db.shared()?)?;
    let update = update?.into_inner();
    let update = usecases::UpdateSpot {
        name: update.name,
        description: update.description,
        lat: update.lat,
        lng: update.lng,
        category: update.category.map(Into::into),
        facilities: update.facilities,
        published: update.is_published,
        photo_urls: update.photos,
        tags: update.tags,
    };
    let spot = flows::update_spot(&db, &user, &id.into(), update)?;
    Ok(Json(spot.into()))
}

#[delete("/spots/<id>")]
pub fn delete_spot(db: sqlite::Connections, auth: Auth, id: String) -> Result<json::Success> {
    let user = auth.user(&db.shared()?)?;
    flows::delete_spot(&db, &user, &id.into())?;
    Ok(Json(json::Success { success: true }))
}

#[post("/spots/<id>/vote", format = "application/json", data = "<vote>")]
pub fn post_vote(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    vote: JsonResult<json::VoteRequest>,
) -> Result<json::ScoreResponse> {
    let user = auth.user(&db.shared()?)?;
    let score = flows::vote_spot(&db, &user, &id.into(), vote?.into_inner().value)?;
    Ok(Json(json::ScoreResponse { score }))
}
