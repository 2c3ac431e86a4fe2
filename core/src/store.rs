//! SQLite session store.
//!
//! RULE: Only the store modules talk to the database.
//! Everything else calls store methods — nothing executes SQL directly.
//!
//! A normal session opens the store in memory; its contents live and die
//! with the process. File-backed opening exists for tooling.

use crate::{error::DeskResult, event::EventLogEntry, types::TimestampMs};
use rusqlite::{params, Connection};

mod account;
mod complaint;
mod department;

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    pub fn open(path: &str) -> DeskResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database — the normal case.
    pub fn in_memory() -> DeskResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> DeskResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        self.conn
            .execute_batch(include_str!("../../migrations/002_departments.sql"))?;
        self.conn
            .execute_batch(include_str!("../../migrations/003_complaints.sql"))?;
        Ok(())
    }

    // ── Session ────────────────────────────────────────────────

    pub fn insert_session(
        &self,
        session_id: &str,
        seed: u64,
        version: &str,
        started_at_ms: TimestampMs,
    ) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO session (session_id, seed, version, started_at_ms)
             VALUES (?1, ?2, ?3, ?4)",
            params![session_id, seed as i64, version, started_at_ms],
        )?;
        Ok(())
    }

    // ── Event log ──────────────────────────────────────────────

    pub fn append_event(&self, entry: &EventLogEntry) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO event_log (session_id, at_ms, event_type, payload)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &entry.session_id,
                entry.at_ms,
                &entry.event_type,
                &entry.payload
            ],
        )?;
        Ok(())
    }

    pub fn events_for_session(&self, session_id: &str) -> DeskResult<Vec<EventLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, session_id, at_ms, event_type, payload
             FROM event_log WHERE session_id = ?1 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(params![session_id], |row| {
            Ok(EventLogEntry {
                id: row.get(0)?,
                session_id: row.get(1)?,
                at_ms: row.get(2)?,
                event_type: row.get(3)?,
                payload: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn event_count(&self, session_id: &str, event_type: &str) -> DeskResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM event_log WHERE session_id = ?1 AND event_type = ?2",
                params![session_id, event_type],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }
}
