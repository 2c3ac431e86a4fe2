//! Accounts and the role variant that gates each dashboard.

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// What a signed-in user is allowed to see. A department account carries
/// the department it triages for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Role {
    Citizen,
    Department { department: String },
    Admin,
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Citizen => RoleKind::Citizen,
            Self::Department { .. } => RoleKind::Department,
            Self::Admin => RoleKind::Admin,
        }
    }
}

/// The role discriminant alone — what the store column and the demo-login
/// selector work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    Citizen,
    Department,
    Admin,
}

impl RoleKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "citizen" => Some(Self::Citizen),
            "department" => Some(Self::Department),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Department => "department",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
}
