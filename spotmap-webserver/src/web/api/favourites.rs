use super::*;

#[get("/me/favourites", format = "application/json")]
pub fn get_favourites(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Spot>> {
    let user = auth.user(&db.shared()?)?;
    let spots = flows::favourite_spots(&db, &user)?;
    Ok(Json(spots.into_iter().map(Into::into).collect()))
}

#[post("/me/favourites", format = "application/json", data = "<fav>")]
pub fn post_favourite(
    db: sqlite::Connections,
    auth: Auth,
    fav: JsonResult<json::NewFavourite>,
) -> Result<json::Spot> {
    let user = auth.user(&db.shared()?)?;
    let spot = flows::add_favourite_spot(&db, &user, &fav?.into_inner().spot_id.into())?;
    Ok(Json(spot.into()))
}

#[delete("/me/favourites/<spot_id>")]
pub fn delete_favourite(
    db: sqlite::Connections,
    auth: Auth,
    spot_id: String,
) -> Result<json::Success> {
    let user = auth.user(&db.shared()?)?;
    flows::remove_favourite_spot(&db, &user, &spot_id.into())?;
    Ok(Json(json::Success { success: true }))
}
