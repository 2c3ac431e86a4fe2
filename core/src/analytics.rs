//! Derived analytics — recomputed from the current snapshot on every read.
//!
//! summarize() is pure: same inputs, same output, no caching, no failure
//! path. Every division guards its denominator and degrades to 0.

use crate::{
    intake::{Category, ComplaintRecord, Priority, Status},
    registry::DepartmentRecord,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: i64,
}

/// Live-session figures for one registry department, carried next to the
/// seed counters. The two are deliberately not merged: the seed numbers
/// describe a pre-existing workload baseline, the live numbers this session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPerformance {
    pub id: String,
    pub name: String,
    pub seed_total: i64,
    pub seed_resolved: i64,
    pub seed_pending: i64,
    pub live_total: i64,
    pub resolution_rate: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total: i64,
    pub resolved: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolution_rate: i64,
    pub category_breakdown: Vec<CategoryCount>,
    pub priority_breakdown: Vec<PriorityCount>,
    pub department_performance: Vec<DepartmentPerformance>,
}

/// round(part / whole × 100), with an empty whole short-circuiting to 0.
fn rate_pct(part: i64, whole: i64) -> i64 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

pub fn summarize(
    complaints: &[ComplaintRecord],
    departments: &[DepartmentRecord],
) -> SessionStats {
    let total = complaints.len() as i64;
    let mut resolved = 0i64;
    let mut pending = 0i64;
    let mut in_progress = 0i64;
    for c in complaints {
        match c.status {
            Status::Resolved => resolved += 1,
            Status::Pending => pending += 1,
            Status::InProgress => in_progress += 1,
        }
    }

    // Breakdown keys appear in first-seen order, and only when at least
    // one complaint carries them.
    let mut category_breakdown: Vec<CategoryCount> = Vec::new();
    for c in complaints {
        match category_breakdown
            .iter_mut()
            .find(|e| e.category == c.category)
        {
            Some(entry) => entry.count += 1,
            None => category_breakdown.push(CategoryCount {
                category: c.category,
                count: 1,
            }),
        }
    }

    let mut priority_breakdown: Vec<PriorityCount> = Vec::new();
    for c in complaints {
        match priority_breakdown
            .iter_mut()
            .find(|e| e.priority == c.priority)
        {
            Some(entry) => entry.count += 1,
            None => priority_breakdown.push(PriorityCount {
                priority: c.priority,
                count: 1,
            }),
        }
    }

    let department_performance = departments
        .iter()
        .map(|d| {
            let live_total = complaints.iter().filter(|c| c.department == d.name).count() as i64;
            let live_resolved = complaints
                .iter()
                .filter(|c| c.department == d.name && c.status == Status::Resolved)
                .count() as i64;
            DepartmentPerformance {
                id: d.id.clone(),
                name: d.name.clone(),
                seed_total: d.total_complaints,
                seed_resolved: d.resolved_count,
                seed_pending: d.pending_count,
                live_total,
                resolution_rate: rate_pct(live_resolved, live_total),
            }
        })
        .collect();

    SessionStats {
        total,
        resolved,
        pending,
        in_progress,
        resolution_rate: rate_pct(resolved, total),
        category_breakdown,
        priority_breakdown,
        department_performance,
    }
}
