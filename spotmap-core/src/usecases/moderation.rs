use super::prelude::*;
use crate::authorization;

pub fn all_reports<R: ReportRepo>(repo: &R, moderator: &User) -> Result<Vec<Report>> {
    authorization::user::authorize_role(moderator, Role::Admin)?;
    Ok(repo.all_reports()?)
}

pub fn moderation_queue<R: ReportRepo>(repo: &R, moderator: &User) -> Result<Vec<Report>> {
    authorization::user::authorize_role(moderator, Role::Admin)?;
    Ok(repo.pending_reports()?)
}

/// Settles a pending report.
///
/// The decision is appended to the audit log. An approved report
/// unpublishes the reported spot.
pub fn resolve_report<R>(
    repo: &R,
    moderator: &User,
    report_id: &Id,
    action: ModerationAction,
) -> Result<Report>
where
    R: ReportRepo + AuditLogRepo + SpotRepo,
{
    authorization::user::authorize_role(moderator, Role::Admin)?;
    let mut report = repo.get_report(report_id)?;
    report.status = match action {
        ModerationAction::Approve => ReportStatus::Approved,
        ModerationAction::Reject => ReportStatus::Rejected,
    };
    repo.update_report(&report)?;
    repo.append_audit_log_entry(&AuditLogEntry {
        id: Id::new(),
        report_id: report.id.clone(),
        user_id: moderator.id.clone(),
        action,
        created_at: Timestamp::now(),
    })?;
    if action == ModerationAction::Approve {
        let mut spot = repo.get_spot(&report.spot_id)?;
        spot.published = false;
        repo.update_spot(&spot)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            create_spot::{create_spot, NewSpot},
            report_spot::report_spot,
            tests::{mock_user, MockDb},
            *,
        },
        *,
    };

    fn seed_report(db: &MockDb) -> Report {
        let spot = create_spot(
            db,
            &Id::new(),
            NewSpot {
                name: "a".into(),
                lat: 1.0,
                lng: 2.0,
                published: true,
                ..Default::default()
            },
        )
        .unwrap();
        report_spot(db, &spot.id, "inappropriate".into()).unwrap()
    }

    #[test]
    fn approving_unpublishes_the_spot() {
        let db = MockDb::default();
        let admin = mock_user("admin@b.io", Role::Admin);
        let report = seed_report(&db);
        let resolved = resolve_report(&db, &admin, &report.id, ModerationAction::Approve).unwrap();
        assert_eq!(resolved.status, ReportStatus::Approved);
        assert!(!db.get_spot(&report.spot_id).unwrap().published);
        assert_eq!(db.audit_log.borrow().len(), 1);
    }

    #[test]
    fn rejecting_keeps_the_spot_published() {
        let db = MockDb::default();
        let admin = mock_user("admin@b.io", Role::Admin);
        let report = seed_report(&db);
        let resolved = resolve_report(&db, &admin, &report.id, ModerationAction::Reject).unwrap();
        assert_eq!(resolved.status, ReportStatus::Rejected);
        assert!(db.get_spot(&report.spot_id).unwrap().published);
        assert_eq!(db.audit_log.borrow().len(), 1);
    }

    #[test]
    fn resolved_reports_leave_the_queue() {
        let db = MockDb::default();
        let admin = mock_user("admin@b.io", Role::Admin);
        let report = seed_report(&db);
        assert_eq!(moderation_queue(&db, &admin).unwrap().len(), 1);
        resolve_report(&db, &admin, &report.id, ModerationAction::Reject).unwrap();
        assert!(moderation_queue(&db, &admin).unwrap().is_empty());
        assert_eq!(all_reports(&db, &admin).unwrap().len(), 1);
    }

    #[test]
    fn non_admins_are_rejected() {
        let db = MockDb::default();
        let user = mock_user("user@b.io", Role::User);
        let report = seed_report(&db);
        assert!(matches!(
            moderation_queue(&db, &user),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            resolve_report(&db, &user, &report.id, ModerationAction::Approve),
            Err(Error::Forbidden)
        ));
    }
}
