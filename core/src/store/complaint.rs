use super::SessionStore;
use crate::{
    error::DeskResult,
    intake::{Category, ComplaintRecord, Priority, Status},
    types::TimestampMs,
};
use rusqlite::params;

const COMPLAINT_COLUMNS: &str = "complaint_id, submitter_id, submitter_name, title, description,
        location, category, assigned_category, department, status, priority,
        submitted_at_ms, resolved_at_ms, photo_ref, classifier_note, classifier_confidence";

fn parse_enum_col<T>(idx: usize, raw: &str, parse: fn(&str) -> Option<T>) -> rusqlite::Result<T> {
    parse(raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unrecognized value: {raw}").into(),
        )
    })
}

// Helper function for mapping complaint rows
fn complaint_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<ComplaintRecord> {
    let status: String = row.get(9)?;
    let priority: String = row.get(10)?;
    Ok(ComplaintRecord {
        complaint_id: row.get(0)?,
        submitter_id: row.get(1)?,
        submitter_name: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        location: row.get(5)?,
        category: Category::parse(&row.get::<_, String>(6)?),
        assigned_category: Category::parse(&row.get::<_, String>(7)?),
        department: row.get(8)?,
        status: parse_enum_col(9, &status, Status::parse)?,
        priority: parse_enum_col(10, &priority, Priority::parse)?,
        submitted_at_ms: row.get(11)?,
        resolved_at_ms: row.get(12)?,
        photo_ref: row.get(13)?,
        classifier_note: row.get(14)?,
        classifier_confidence: row.get(15)?,
    })
}

impl SessionStore {
    // ── Complaint ──────────────────────────────────────────────────

    pub fn insert_complaint(&self, session_id: &str, c: &ComplaintRecord) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO complaint (
                session_id, complaint_id, submitter_id, submitter_name, title, description,
                location, category, assigned_category, department, status, priority,
                submitted_at_ms, resolved_at_ms, photo_ref, classifier_note, classifier_confidence
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
            params![
                session_id,
                &c.complaint_id,
                &c.submitter_id,
                &c.submitter_name,
                &c.title,
                &c.description,
                &c.location,
                c.category.as_str(),
                c.assigned_category.as_str(),
                &c.department,
                c.status.as_str(),
                c.priority.as_str(),
                c.submitted_at_ms,
                c.resolved_at_ms,
                c.photo_ref.as_deref(),
                &c.classifier_note,
                c.classifier_confidence,
            ],
        )?;
        Ok(())
    }

    /// Newest submission first. seq is fixed at insert time, so status
    /// updates never reorder the listing.
    pub fn complaints_newest_first(&self, session_id: &str) -> DeskResult<Vec<ComplaintRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaint
             WHERE session_id = ?1 ORDER BY seq DESC"
        ))?;
        let rows = stmt.query_map(params![session_id], complaint_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn complaints_for_submitter(
        &self,
        session_id: &str,
        submitter_id: &str,
    ) -> DeskResult<Vec<ComplaintRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaint
             WHERE session_id = ?1 AND submitter_id = ?2 ORDER BY seq DESC"
        ))?;
        let rows = stmt.query_map(params![session_id, submitter_id], complaint_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn complaints_for_department(
        &self,
        session_id: &str,
        department: &str,
    ) -> DeskResult<Vec<ComplaintRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaint
             WHERE session_id = ?1 AND department = ?2 ORDER BY seq DESC"
        ))?;
        let rows = stmt.query_map(params![session_id, department], complaint_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Returns the number of rows touched: 0 means the id was not found,
    /// which callers treat as a no-op.
    pub fn update_complaint_status(
        &self,
        session_id: &str,
        complaint_id: &str,
        status: Status,
        resolved_at_ms: Option<TimestampMs>,
    ) -> DeskResult<usize> {
        let touched = self.conn.execute(
            "UPDATE complaint SET status = ?1, resolved_at_ms = ?2
             WHERE session_id = ?3 AND complaint_id = ?4",
            params![status.as_str(), resolved_at_ms, session_id, complaint_id],
        )?;
        Ok(touched)
    }
}
