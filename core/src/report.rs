//! Report export — a point-in-time JSON snapshot of the analytics.
//!
//! The document keeps the camelCase shape the admin dashboard downloads.

use crate::analytics::SessionStats;
use serde::Serialize;

/// Placeholder figure carried over from the demo — resolution time is not
/// actually measured anywhere yet.
pub const AVG_RESOLUTION_TIME_DAYS: f64 = 2.5;

/// Canned insight strings. Static content, never derived from the data.
pub const AI_INSIGHTS: [&str; 4] = [
    "Peak complaint hours: 9 AM - 11 AM and 2 PM - 4 PM",
    "Most common issues: Road maintenance (35%), Electricity (28%)",
    "Average citizen satisfaction: 4.2/5",
    "Seasonal pattern: Water complaints increase by 40% during summer",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_complaints: i64,
    pub resolved_complaints: i64,
    pub pending_complaints: i64,
    pub resolution_rate: i64,
    pub avg_resolution_time: f64,
}

/// Seed baseline (complaints/resolved/pending) and live session figures
/// (totalComplaints/resolutionRate) side by side, unmerged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDepartment {
    pub id: String,
    pub name: String,
    pub complaints: i64,
    pub resolved: i64,
    pub pending: i64,
    pub total_complaints: i64,
    pub resolution_rate: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub generated_at: String,
    pub period: String,
    pub summary: ReportSummary,
    pub department_performance: Vec<ReportDepartment>,
    pub category_breakdown: serde_json::Map<String, serde_json::Value>,
    pub ai_insights: Vec<&'static str>,
}

pub fn build_report(stats: &SessionStats, generated_at: String, period_days: u32) -> ReportSnapshot {
    let mut category_breakdown = serde_json::Map::new();
    for entry in &stats.category_breakdown {
        category_breakdown.insert(
            entry.category.to_string(),
            serde_json::Value::from(entry.count),
        );
    }

    ReportSnapshot {
        generated_at,
        period: format!("Last {period_days} days"),
        summary: ReportSummary {
            total_complaints: stats.total,
            resolved_complaints: stats.resolved,
            pending_complaints: stats.pending,
            resolution_rate: stats.resolution_rate,
            avg_resolution_time: AVG_RESOLUTION_TIME_DAYS,
        },
        department_performance: stats
            .department_performance
            .iter()
            .map(|d| ReportDepartment {
                id: d.id.clone(),
                name: d.name.clone(),
                complaints: d.seed_total,
                resolved: d.seed_resolved,
                pending: d.seed_pending,
                total_complaints: d.live_total,
                resolution_rate: d.resolution_rate,
            })
            .collect(),
        category_breakdown,
        ai_insights: AI_INSIGHTS.to_vec(),
    }
}
