//! Department registry — a static workload baseline.
//!
//! The counters are seed data describing work that predates the session.
//! They are never recomputed from live complaints; the analytics layer
//! exposes both side by side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub id: String,
    pub name: String,
    pub total_complaints: i64,
    pub resolved_count: i64,
    pub pending_count: i64,
}
