//! Complaint intake — draft validation and record construction.
//!
//! A draft carries what the submission form collects. Validation runs in
//! front of the store: an unsubmittable draft never produces a record.

use crate::{
    classifier::Classification,
    error::{DeskError, DeskResult},
    types::{EntityId, TimestampMs},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed category set offered by the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electricity,
    Water,
    Road,
    Waste,
    Other,
}

impl Category {
    /// Total parse: anything outside the known set collapses to `other`,
    /// which routes to General Services downstream.
    pub fn parse(s: &str) -> Self {
        match s {
            "electricity" => Self::Electricity,
            "water" => Self::Water,
            "road" => Self::Road,
            "waste" => Self::Waste,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Road => "road",
            Self::Waste => "waste",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint lifecycle state. Transitions are deliberately unrestricted:
/// any state may follow any other, including resolved back to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the submission form hands over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub photo_ref: Option<String>,
}

impl ComplaintDraft {
    /// Required free-text fields must be non-empty (whitespace counts as
    /// empty). Drafts that fail here never reach the store.
    pub fn validate(&self) -> DeskResult<()> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(DeskError::EmptyField { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub complaint_id: EntityId,
    pub submitter_id: EntityId,
    pub submitter_name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub assigned_category: Category,
    pub department: String,
    pub status: Status,
    pub priority: Priority,
    pub submitted_at_ms: TimestampMs,
    #[serde(default)]
    pub resolved_at_ms: Option<TimestampMs>,
    #[serde(default)]
    pub photo_ref: Option<String>,
    pub classifier_note: String,
    pub classifier_confidence: f64,
}

/// Build a fully-populated record from a validated draft.
/// With nobody signed in, the filer is recorded as anonymous.
pub fn make_complaint(
    complaint_id: EntityId,
    submitter: Option<(&str, &str)>,
    draft: &ComplaintDraft,
    classification: Classification,
    submitted_at_ms: TimestampMs,
) -> ComplaintRecord {
    let (submitter_id, submitter_name) = match submitter {
        Some((id, name)) => (id.to_string(), name.to_string()),
        None => ("anonymous".to_string(), "Anonymous User".to_string()),
    };
    ComplaintRecord {
        complaint_id,
        submitter_id,
        submitter_name,
        title: draft.title.clone(),
        description: draft.description.clone(),
        location: draft.location.clone(),
        category: draft.category,
        // The stub confirms the filer's category rather than correcting it.
        assigned_category: draft.category,
        department: classification.department,
        status: Status::Pending,
        priority: draft.priority.unwrap_or_default(),
        submitted_at_ms,
        resolved_at_ms: None,
        photo_ref: draft.photo_ref.clone(),
        classifier_note: classification.note,
        classifier_confidence: classification.confidence,
    }
}
