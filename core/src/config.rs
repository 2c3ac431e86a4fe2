//! Seed data — the department registry, the demo accounts, and the demo
//! complaints a fresh session starts with.
//!
//! Loaded from a data/ directory at startup, or embedded at compile time
//! via `default_demo()` for tests and the in-memory session.

use crate::{account::Account, intake::ComplaintRecord, registry::DepartmentRecord};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct DepartmentsFile {
    departments: Vec<DepartmentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct AccountsFile {
    accounts: Vec<Account>,
}

#[derive(Debug, Clone, Deserialize)]
struct SeedComplaintsFile {
    complaints: Vec<ComplaintRecord>,
}

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub departments: Vec<DepartmentRecord>,
    pub demo_accounts: Vec<Account>,
    /// Listed newest-submission-first, matching how the desk displays them.
    pub seed_complaints: Vec<ComplaintRecord>,
}

impl DeskConfig {
    /// Load from the data/ directory.
    /// In tests, use DeskConfig::default_demo().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/departments.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let departments: DepartmentsFile = serde_json::from_str(&content)?;

        let path = format!("{data_dir}/accounts.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let accounts: AccountsFile = serde_json::from_str(&content)?;

        let path = format!("{data_dir}/seed_complaints.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let complaints: SeedComplaintsFile = serde_json::from_str(&content)?;

        Ok(Self {
            departments: departments.departments,
            demo_accounts: accounts.accounts,
            seed_complaints: complaints.complaints,
        })
    }

    /// The demo data set shipped under data/, embedded at compile time.
    pub fn default_demo() -> anyhow::Result<Self> {
        let departments: DepartmentsFile =
            serde_json::from_str(include_str!("../../data/departments.json"))?;
        let accounts: AccountsFile = serde_json::from_str(include_str!("../../data/accounts.json"))?;
        let complaints: SeedComplaintsFile =
            serde_json::from_str(include_str!("../../data/seed_complaints.json"))?;
        Ok(Self {
            departments: departments.departments,
            demo_accounts: accounts.accounts,
            seed_complaints: complaints.complaints,
        })
    }
}
