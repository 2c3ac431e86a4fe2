use super::SessionStore;
use crate::{error::DeskResult, registry::DepartmentRecord};
use rusqlite::params;

impl SessionStore {
    // ── Department registry ────────────────────────────────────────

    pub fn insert_department(&self, session_id: &str, d: &DepartmentRecord) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO department (
                session_id, department_id, name, total_complaints, resolved_count, pending_count
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                session_id,
                &d.id,
                &d.name,
                d.total_complaints,
                d.resolved_count,
                d.pending_count,
            ],
        )?;
        Ok(())
    }

    /// Registry rows in seed order.
    pub fn departments(&self, session_id: &str) -> DeskResult<Vec<DepartmentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT department_id, name, total_complaints, resolved_count, pending_count
             FROM department WHERE session_id = ?1 ORDER BY seq ASC",
        )?;
        let rows = stmt.query_map(params![session_id], |row| {
            Ok(DepartmentRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                total_complaints: row.get(2)?,
                resolved_count: row.get(3)?,
                pending_count: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
