use super::*;

#[get("/tags", format = "application/json")]
pub fn get_tags(db: sqlite::Connections) -> Result<Vec<json::Tag>> {
    let tags = flows::all_tags(&db)?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

#[post("/tags", format = "application/json", data = "<new_tag>")]
pub fn post_tag(
    db: sqlite::Connections,
    auth: Auth,
    new_tag: JsonResult<json::Tag>,
) -> Result<json::Tag> {
    auth.user(&db.shared()?)?;
    let tag = flows::create_tag(&db, &new_tag?.into_inner().name)?;
    Ok(Json(tag.into()))
}
