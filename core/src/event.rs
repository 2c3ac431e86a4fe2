//! The session event log — every mutation leaves a record.
//!
//! Purely observational: nothing in the core replays events. The log
//! exists so tooling and tests can see what a session did.

use crate::{
    intake::{Category, Status},
    types::{EntityId, SessionId, TimestampMs},
};
use serde::{Deserialize, Serialize};

/// Every event a session can emit.
/// Variants are appended over time — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    SessionStarted {
        session_id: SessionId,
        seed: u64,
    },
    LoggedIn {
        account_id: EntityId,
    },
    LoggedOut {
        account_id: EntityId,
    },
    AccountRegistered {
        account_id: EntityId,
    },
    ComplaintFiled {
        complaint_id: EntityId,
        category: Category,
        department: String,
    },
    StatusChanged {
        complaint_id: EntityId,
        new_status: Status,
    },
    ReportExported {
        period_days: u32,
    },
}

/// Extract a stable string name from a DeskEvent variant.
/// Used for the event_type column in event_log.
pub fn event_type_name(event: &DeskEvent) -> &'static str {
    match event {
        DeskEvent::SessionStarted { .. } => "session_started",
        DeskEvent::LoggedIn { .. } => "logged_in",
        DeskEvent::LoggedOut { .. } => "logged_out",
        DeskEvent::AccountRegistered { .. } => "account_registered",
        DeskEvent::ComplaintFiled { .. } => "complaint_filed",
        DeskEvent::StatusChanged { .. } => "status_changed",
        DeskEvent::ReportExported { .. } => "report_exported",
    }
}

/// The event log entry as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id: Option<i64>,
    pub session_id: SessionId,
    pub at_ms: TimestampMs,
    pub event_type: String,
    pub payload: String, // JSON-serialized DeskEvent
}
