use num_traits::ToPrimitive as _;

use super::*;

impl<'a> ReportRepo for DbReadOnly<'a> {
    fn create_report(&self, _report: &Report) -> Result<()> {
        unreachable!();
    }
    fn update_report(&self, _report: &Report) -> Result<()> {
        unreachable!();
    }

    fn get_report(&self, id: &Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn all_reports(&self) -> Result<Vec<Report>> {
        all_reports(&mut self.conn.borrow_mut())
    }
    fn pending_reports(&self) -> Result<Vec<Report>> {
        pending_reports(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReportRepo for DbReadWrite<'a> {
    fn create_report(&self, report: &Report) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update_report(&mut self.conn.borrow_mut(), report)
    }

    fn get_report(&self, id: &Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn all_reports(&self) -> Result<Vec<Report>> {
        all_reports(&mut self.conn.borrow_mut())
    }
    fn pending_reports(&self) -> Result<Vec<Report>> {
        pending_reports(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReportRepo for DbConnection<'a> {
    fn create_report(&self, report: &Report) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update_report(&mut self.conn.borrow_mut(), report)
    }

    fn get_report(&self, id: &Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn all_reports(&self) -> Result<Vec<Report>> {
        all_reports(&mut self.conn.borrow_mut())
    }
    fn pending_reports(&self) -> Result<Vec<Report>> {
        pending_reports(&mut self.conn.borrow_mut())
    }
}

impl<'a> AuditLogRepo for DbReadOnly<'a> {
    fn append_audit_log_entry(&self, _entry: &AuditLogEntry) -> Result<()> {
        unreachable!();
    }
    fn audit_log_of_report(&self, report_id: &Id) -> Result<Vec<AuditLogEntry>> {
        audit_log_of_report(&mut self.conn.borrow_mut(), report_id)
    }
}

impl<'a> AuditLogRepo for DbReadWrite<'a> {
    fn append_audit_log_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        append_audit_log_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn audit_log_of_report(&self, report_id: &Id) -> Result<Vec<AuditLogEntry>> {
        audit_log_of_report(&mut self.conn.borrow_mut(), report_id)
    }
}

impl<'a> AuditLogRepo for DbConnection<'a> {
    fn append_audit_log_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        append_audit_log_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn audit_log_of_report(&self, report_id: &Id) -> Result<Vec<AuditLogEntry>> {
        audit_log_of_report(&mut self.conn.borrow_mut(), report_id)
    }
}

fn create_report(conn: &mut SqliteConnection, report: &Report) -> Result<()> {
    diesel::insert_into(schema::reports::table)
        .values(&models::NewReport::from(report))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_report(conn: &mut SqliteConnection, report: &Report) -> Result<()> {
    use schema::reports::dsl;
    let count = diesel::update(dsl::reports.filter(dsl::id.eq(report.id.as_str())))
        .set(&models::NewReport::from(report))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_report(conn: &mut SqliteConnection, id: &Id) -> Result<Report> {
    use schema::reports::dsl;
    Ok(dsl::reports
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_reports(conn: &mut SqliteConnection) -> Result<Vec<Report>> {
    use schema::reports::dsl;
    Ok(dsl::reports
        .order(dsl::created_at.asc())
        .load::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn pending_reports(conn: &mut SqliteConnection) -> Result<Vec<Report>> {
    use schema::reports::dsl;
    let pending = ReportStatus::Pending.to_i16().unwrap_or_default();
    Ok(dsl::reports
        .filter(dsl::status.eq(pending))
        .order(dsl::created_at.asc())
        .load::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn append_audit_log_entry(conn: &mut SqliteConnection, entry: &AuditLogEntry) -> Result<()> {
    diesel::insert_into(schema::audit_log::table)
        .values(&models::NewAuditLogEntry::from(entry))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn audit_log_of_report(conn: &mut SqliteConnection, report_id: &Id) -> Result<Vec<AuditLogEntry>> {
    use schema::audit_log::dsl;
    Ok(dsl::audit_log
        .filter(dsl::report_id.eq(report_id.as_str()))
        .order(dsl::created_at.asc())
        .load::<models::AuditLogEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
