use super::SessionStore;
use crate::{
    account::{Account, Role, RoleKind},
    error::DeskResult,
};
use rusqlite::{params, OptionalExtension};

fn account_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
    let kind: String = row.get(3)?;
    let department: Option<String> = row.get(4)?;
    let role = match kind.as_str() {
        "citizen" => Role::Citizen,
        "admin" => Role::Admin,
        "department" => Role::Department {
            department: department.ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Text,
                    "department role without a department name".into(),
                )
            })?,
        },
        other => {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("unrecognized role: {other}").into(),
            ))
        }
    };
    Ok(Account {
        account_id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        role,
    })
}

impl SessionStore {
    // ── Account ────────────────────────────────────────────────────

    pub fn insert_account(&self, session_id: &str, a: &Account) -> DeskResult<()> {
        let department = match &a.role {
            Role::Department { department } => Some(department.as_str()),
            _ => None,
        };
        self.conn.execute(
            "INSERT INTO account (session_id, account_id, email, name, role, department)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                session_id,
                &a.account_id,
                &a.email,
                &a.name,
                a.role.kind().as_str(),
                department,
            ],
        )?;
        Ok(())
    }

    pub fn account_by_email(&self, session_id: &str, email: &str) -> DeskResult<Option<Account>> {
        self.conn
            .query_row(
                "SELECT account_id, email, name, role, department
                 FROM account WHERE session_id = ?1 AND email = ?2",
                params![session_id, email],
                account_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    /// The first seeded account with the given role — the demo-login target.
    pub fn first_account_with_role(
        &self,
        session_id: &str,
        kind: RoleKind,
    ) -> DeskResult<Option<Account>> {
        self.conn
            .query_row(
                "SELECT account_id, email, name, role, department
                 FROM account WHERE session_id = ?1 AND role = ?2
                 ORDER BY rowid ASC LIMIT 1",
                params![session_id, kind.as_str()],
                account_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }
}
