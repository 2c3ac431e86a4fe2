//! The desk session — single-writer coordinator over the session store.
//!
//! RULES:
//!   - All mutations go through DeskSession and land in the event log.
//!   - All randomness flows through the RngBank.
//!   - Reads recompute from the store snapshot; nothing is cached.

use crate::{
    account::{Account, Role, RoleKind},
    analytics::{self, SessionStats},
    classifier,
    clock::SessionClock,
    config::DeskConfig,
    error::DeskResult,
    event::{event_type_name, DeskEvent, EventLogEntry},
    intake::{self, ComplaintDraft, ComplaintRecord, Status},
    registry::DepartmentRecord,
    report,
    rng::{ComponentRng, ComponentSlot, RngBank},
    store::SessionStore,
    types::{EntityId, SessionId, TimestampMs},
};

pub struct DeskSession {
    pub session_id: SessionId,
    pub clock: SessionClock,
    store: SessionStore,
    classifier_rng: ComponentRng,
    id_rng: ComponentRng,
    current_user: Option<Account>,
}

impl DeskSession {
    /// Start a session against an already-migrated store: record the
    /// session, seed the department registry, the demo accounts, and the
    /// demo complaints, then open the event log.
    pub fn start(
        store: SessionStore,
        config: &DeskConfig,
        seed: u64,
        clock: SessionClock,
    ) -> DeskResult<Self> {
        let session_id = clock.session_id.clone();
        let bank = RngBank::new(seed);
        let session = Self {
            session_id: session_id.clone(),
            clock,
            store,
            classifier_rng: bank.for_component(ComponentSlot::Classifier),
            id_rng: bank.for_component(ComponentSlot::IdAlloc),
            current_user: None,
        };

        session.store.insert_session(
            &session.session_id,
            seed,
            env!("CARGO_PKG_VERSION"),
            session.clock.now_ms(),
        )?;
        for department in &config.departments {
            session
                .store
                .insert_department(&session.session_id, department)?;
        }
        for account in &config.demo_accounts {
            session.store.insert_account(&session.session_id, account)?;
        }
        // Seed data lists complaints newest-first; insert oldest-first so
        // the newest-first listing reproduces it.
        for complaint in config.seed_complaints.iter().rev() {
            session
                .store
                .insert_complaint(&session.session_id, complaint)?;
        }

        session.append_event(DeskEvent::SessionStarted { session_id, seed })?;
        log::info!(
            "session {} started (seed={seed}, {} seed complaints)",
            session.session_id,
            config.seed_complaints.len()
        );
        Ok(session)
    }

    /// In-memory session with the embedded demo data — the normal entry
    /// point for the runner.
    pub fn start_in_memory(seed: u64) -> DeskResult<Self> {
        let store = SessionStore::in_memory()?;
        store.migrate()?;
        let config = DeskConfig::default_demo()?;
        let session_id = uuid::Uuid::new_v4().to_string();
        Self::start(store, &config, seed, SessionClock::system(session_id))
    }

    /// In-memory session on a manual clock — tests drive time explicitly.
    pub fn start_test(seed: u64, start_ms: TimestampMs) -> DeskResult<Self> {
        let store = SessionStore::in_memory()?;
        store.migrate()?;
        let config = DeskConfig::default_demo()?;
        let session_id = format!("session-{seed:x}");
        Self::start(store, &config, seed, SessionClock::manual(session_id, start_ms))
    }

    fn append_event(&self, event: DeskEvent) -> DeskResult<()> {
        let entry = EventLogEntry {
            id: None,
            session_id: self.session_id.clone(),
            at_ms: self.clock.now_ms(),
            event_type: event_type_name(&event).to_string(),
            payload: serde_json::to_string(&event)?,
        };
        self.store.append_event(&entry)
    }

    // Time-derived with a random suffix: unique within the session,
    // same-millisecond ordering not guaranteed.
    fn next_id(&mut self, prefix: &str) -> EntityId {
        format!(
            "{prefix}-{:x}-{:08x}",
            self.clock.now_ms(),
            self.id_rng.next_u64() as u32
        )
    }

    // ── Accounts ───────────────────────────────────────────────

    pub fn current_user(&self) -> Option<&Account> {
        self.current_user.as_ref()
    }

    /// Demo-grade login: an email match against the session's accounts.
    /// A miss is Ok(None) — what to tell the user is the view's call.
    pub fn login(&mut self, email: &str) -> DeskResult<Option<Account>> {
        let Some(account) = self.store.account_by_email(&self.session_id, email)? else {
            return Ok(None);
        };
        self.append_event(DeskEvent::LoggedIn {
            account_id: account.account_id.clone(),
        })?;
        self.current_user = Some(account.clone());
        Ok(Some(account))
    }

    /// Sign in as the seeded demo account for a role.
    pub fn demo_login(&mut self, kind: RoleKind) -> DeskResult<Account> {
        let account = self
            .store
            .first_account_with_role(&self.session_id, kind)?
            .ok_or_else(|| anyhow::anyhow!("No seeded {} account", kind.as_str()))?;
        self.append_event(DeskEvent::LoggedIn {
            account_id: account.account_id.clone(),
        })?;
        self.current_user = Some(account.clone());
        Ok(account)
    }

    /// Create a new account inside the session and sign it in.
    pub fn register(&mut self, email: &str, name: &str, role: Role) -> DeskResult<Account> {
        if self
            .store
            .account_by_email(&self.session_id, email)?
            .is_some()
        {
            return Err(anyhow::anyhow!("An account with email {email} already exists").into());
        }
        let account = Account {
            account_id: self.next_id("usr"),
            email: email.to_string(),
            name: name.to_string(),
            role,
        };
        self.store.insert_account(&self.session_id, &account)?;
        self.append_event(DeskEvent::AccountRegistered {
            account_id: account.account_id.clone(),
        })?;
        self.current_user = Some(account.clone());
        Ok(account)
    }

    /// Clears the signed-in user. Complaints filed so far stay put.
    pub fn logout(&mut self) -> DeskResult<()> {
        if let Some(user) = self.current_user.take() {
            self.append_event(DeskEvent::LoggedOut {
                account_id: user.account_id,
            })?;
        }
        Ok(())
    }

    // ── Complaints ─────────────────────────────────────────────

    /// Validate, classify, and insert a new complaint. The inserted record
    /// comes back as the caller's confirmation view.
    pub fn submit_complaint(&mut self, draft: ComplaintDraft) -> DeskResult<ComplaintRecord> {
        draft.validate()?;

        let now_ms = self.clock.now_ms();
        let priority = draft.priority.unwrap_or_default();
        let classification =
            classifier::classify(draft.category, priority, &mut self.classifier_rng);

        let complaint_id = self.next_id("cmp");
        let submitter = self
            .current_user
            .as_ref()
            .map(|u| (u.account_id.as_str(), u.name.as_str()));
        let record = intake::make_complaint(complaint_id, submitter, &draft, classification, now_ms);

        self.store.insert_complaint(&self.session_id, &record)?;
        self.append_event(DeskEvent::ComplaintFiled {
            complaint_id: record.complaint_id.clone(),
            category: record.category,
            department: record.department.clone(),
        })?;
        log::info!(
            "complaint {} filed -> {} ({:.2})",
            record.complaint_id,
            record.department,
            record.classifier_confidence
        );
        Ok(record)
    }

    /// Set a complaint's status. An unknown id is a no-op, not an error.
    /// resolved_at follows the status: stamped on resolved, cleared on
    /// anything else — even when the previous status was already resolved.
    pub fn update_status(&mut self, complaint_id: &str, new_status: Status) -> DeskResult<()> {
        let resolved_at_ms = (new_status == Status::Resolved).then(|| self.clock.now_ms());
        let touched = self.store.update_complaint_status(
            &self.session_id,
            complaint_id,
            new_status,
            resolved_at_ms,
        )?;
        if touched == 0 {
            log::debug!("status update for unknown complaint {complaint_id} ignored");
            return Ok(());
        }
        self.append_event(DeskEvent::StatusChanged {
            complaint_id: complaint_id.to_string(),
            new_status,
        })
    }

    // ── Reads ──────────────────────────────────────────────────

    pub fn complaints(&self) -> DeskResult<Vec<ComplaintRecord>> {
        self.store.complaints_newest_first(&self.session_id)
    }

    /// The signed-in user's own complaints; empty when nobody is signed in.
    pub fn my_complaints(&self) -> DeskResult<Vec<ComplaintRecord>> {
        let Some(user) = &self.current_user else {
            return Ok(Vec::new());
        };
        self.store
            .complaints_for_submitter(&self.session_id, &user.account_id)
    }

    pub fn department_complaints(&self, department: &str) -> DeskResult<Vec<ComplaintRecord>> {
        self.store
            .complaints_for_department(&self.session_id, department)
    }

    pub fn departments(&self) -> DeskResult<Vec<DepartmentRecord>> {
        self.store.departments(&self.session_id)
    }

    /// Recompute the aggregate view from the current snapshot.
    pub fn stats(&self) -> DeskResult<SessionStats> {
        let complaints = self.complaints()?;
        let departments = self.departments()?;
        Ok(analytics::summarize(&complaints, &departments))
    }

    /// Serialize the analytics snapshot as the downloadable JSON report.
    pub fn export_report(&mut self, period_days: u32) -> DeskResult<String> {
        let stats = self.stats()?;
        let now_ms = self.clock.now_ms();
        let generated_at = chrono::DateTime::from_timestamp_millis(now_ms)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| now_ms.to_string());
        let snapshot = report::build_report(&stats, generated_at, period_days);
        let json = serde_json::to_string_pretty(&snapshot)?;
        self.append_event(DeskEvent::ReportExported { period_days })?;
        Ok(json)
    }

    // ── Event log access (tooling and tests) ───────────────────

    pub fn events(&self) -> DeskResult<Vec<EventLogEntry>> {
        self.store.events_for_session(&self.session_id)
    }

    pub fn event_count(&self, event_type: &str) -> DeskResult<i64> {
        self.store.event_count(&self.session_id, event_type)
    }
}
