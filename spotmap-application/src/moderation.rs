use super::*;

pub fn report_spot(
    connections: &sqlite::Connections,
    spot_id: &Id,
    reason: String,
) -> Result<Report> {
    let report = connections
        .exclusive()?
        .transaction(|conn| usecases::report_spot(conn, spot_id, reason))?;
    info!("Spot {} was reported ({})", report.spot_id, report.id);
    Ok(report)
}

pub fn all_reports(connections: &sqlite::Connections, moderator: &User) -> Result<Vec<Report>> {
    Ok(usecases::all_reports(&connections.shared()?, moderator)?)
}

pub fn moderation_queue(
    connections: &sqlite::Connections,
    moderator: &User,
) -> Result<Vec<Report>> {
    Ok(usecases::moderation_queue(
        &connections.shared()?,
        moderator,
    )?)
}

/// Settles a report in a single transaction: status change, audit log
/// entry and (on approval) unpublishing the spot.
pub fn resolve_report(
    connections: &sqlite::Connections,
    moderator: &User,
    report_id: &Id,
    action: ModerationAction,
) -> Result<Report> {
    let report = connections
        .exclusive()?
        .transaction(|conn| usecases::resolve_report(conn, moderator, report_id, action))?;
    info!(
        "Report {} was resolved as {} by {}",
        report.id, report.status, moderator.id
    );
    Ok(report)
}
