use super::*;

#[post("/reports", format = "application/json", data = "<report>")]
pub fn post_report(
    db: sqlite::Connections,
    auth: Auth,
    report: JsonResult<json::NewReport>,
) -> Result<json::Report> {
    auth.user(&db.shared()?)?;
    let report = report?.into_inner();
    let report = flows::report_spot(&db, &report.spot_id.into(), report.reason)?;
    Ok(Json(report.into()))
}

#[get("/reports", format = "application/json")]
pub fn get_reports(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Report>> {
    let moderator = auth.admin(&db.shared()?)?;
    let reports = flows::all_reports(&db, &moderator)?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[get("/moderation/queue", format = "application/json")]
pub fn get_moderation_queue(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Report>> {
    let moderator = auth.admin(&db.shared()?)?;
    let reports = flows::moderation_queue(&db, &moderator)?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[post("/reports/<id>", format = "application/json", data = "<resolve>")]
pub fn post_resolve_report(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    resolve: JsonResult<json::ResolveReport>,
) -> Result<json::Report> {
    let moderator = auth.admin(&db.shared()?)?;
    let action = resolve?.into_inner().action;
    let report = flows::resolve_report(&db, &moderator, &id.into(), action.into())?;
    Ok(Json(report.into()))
}
