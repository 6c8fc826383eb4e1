use super::prelude::*;

pub fn report_spot<R>(repo: &R, spot_id: &Id, reason: String) -> Result<Report>
where
    R: ReportRepo + SpotRepo,
{
    if reason.trim().is_empty() {
        return Err(Error::EmptyReason);
    }
    repo.get_spot(spot_id)?;
    let report = Report {
        id: Id::new(),
        spot_id: spot_id.clone(),
        reason,
        status: ReportStatus::Pending,
        created_at: Timestamp::now(),
    };
    repo.create_report(&report)?;
    Ok(report)
}
