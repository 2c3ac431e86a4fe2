//! desk-runner: headless driver for the Vaani complaint desk core.
//!
//! Usage:
//!   desk-runner --seed 42 --data-dir ./data
//!   desk-runner --seed 42 --ipc-mode

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use vaani_core::{
    account::{Account, RoleKind},
    analytics::SessionStats,
    clock::SessionClock,
    config::DeskConfig,
    intake::{Category, ComplaintDraft, ComplaintRecord, Priority, Status},
    registry::DepartmentRecord,
    session::DeskSession,
    store::SessionStore,
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Login { email: String },
    DemoLogin { role: RoleKind },
    Logout,
    Submit { draft: ComplaintDraft },
    UpdateStatus { complaint_id: String, status: Status },
    ExportReport { period_days: u32 },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    session_id: String,
    current_user: Option<Account>,
    complaints: Vec<ComplaintRecord>,
    departments: Vec<DepartmentRecord>,
    stats: SessionStats,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str());
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    if !ipc_mode {
        println!("Vaani complaint desk — desk-runner");
        println!("  seed:     {seed}");
        println!("  db:       {}", db.unwrap_or(":memory:"));
        println!("  data_dir: {}", data_dir.unwrap_or("(embedded)"));
        println!();
    }

    let store = match db {
        Some(path) => SessionStore::open(path)?,
        None => SessionStore::in_memory()?,
    };
    store.migrate()?;

    let config = match data_dir {
        Some(dir) => DeskConfig::load(dir)?,
        None => DeskConfig::default_demo()?,
    };

    let session_id = format!("session-{seed}-{}", chrono::Utc::now().timestamp());
    let clock = SessionClock::system(session_id);
    let mut session = DeskSession::start(store, &config, seed, clock)?;

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else {
        run_demo(&mut session)?;
    }

    Ok(())
}

/// Scripted walk through the three dashboards: file as a citizen, triage
/// as department staff, read the analytics as the admin.
fn run_demo(session: &mut DeskSession) -> Result<()> {
    let citizen = session.demo_login(RoleKind::Citizen)?;
    println!("  signed in as {} ({})", citizen.name, citizen.email);

    let first = session.submit_complaint(ComplaintDraft {
        title: "Overflowing bins on Station Road".into(),
        description: "Collection has been missed twice this week and the bins are overflowing."
            .into(),
        category: Category::Waste,
        location: "Station Road, Ward 4".into(),
        priority: Some(Priority::High),
        photo_ref: None,
    })?;
    println!(
        "  filed {} -> {} (confidence {:.2})",
        first.complaint_id, first.department, first.classifier_confidence
    );

    let second = session.submit_complaint(ComplaintDraft {
        title: "Low water pressure in Sector 9".into(),
        description: "Taps have been running at a trickle since Monday morning.".into(),
        category: Category::Water,
        location: "Sector 9, Block C".into(),
        priority: None,
        photo_ref: None,
    })?;
    println!(
        "  filed {} -> {} (confidence {:.2})",
        second.complaint_id, second.department, second.classifier_confidence
    );

    session.logout()?;
    let staff = session.demo_login(RoleKind::Department)?;
    println!("  signed in as {} ({})", staff.name, staff.email);
    session.update_status(&first.complaint_id, Status::InProgress)?;
    session.update_status(&second.complaint_id, Status::Resolved)?;

    session.logout()?;
    let admin = session.demo_login(RoleKind::Admin)?;
    println!("  signed in as {} ({})", admin.name, admin.email);

    print_summary(session)?;

    let report = session.export_report(30)?;
    println!();
    println!("=== EXPORTED REPORT ===");
    println!("{report}");
    Ok(())
}

fn print_summary(session: &DeskSession) -> Result<()> {
    let stats = session.stats()?;
    println!();
    println!("=== SESSION SUMMARY ===");
    println!("  complaints:      {}", stats.total);
    println!("  resolved:        {}", stats.resolved);
    println!("  in progress:     {}", stats.in_progress);
    println!("  pending:         {}", stats.pending);
    println!("  resolution rate: {}%", stats.resolution_rate);
    println!("  events logged:   {}", session.events()?.len());
    println!();
    println!("=== DEPARTMENT PERFORMANCE ===");
    for d in &stats.department_performance {
        println!(
            "  {} | live: {} ({}% resolved) | baseline: {}/{} resolved",
            d.name, d.live_total, d.resolution_rate, d.seed_resolved, d.seed_total
        );
    }
    Ok(())
}

fn run_ipc_loop(session: &mut DeskSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::Login { email } => {
                if session.login(&email)?.is_none() {
                    log::warn!("login failed for {email}");
                }
            }
            IpcCommand::DemoLogin { role } => {
                session.demo_login(role)?;
            }
            IpcCommand::Logout => session.logout()?,
            IpcCommand::Submit { draft } => {
                // A rejected draft is the caller's problem, not a reason
                // to drop the connection.
                if let Err(e) = session.submit_complaint(draft) {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{err_json}")?;
                    stdout.flush()?;
                    continue;
                }
            }
            IpcCommand::UpdateStatus {
                complaint_id,
                status,
            } => session.update_status(&complaint_id, status)?,
            IpcCommand::ExportReport { period_days } => {
                let report = session.export_report(period_days)?;
                // Re-encode compactly so the reply stays on one line.
                let value: serde_json::Value = serde_json::from_str(&report)?;
                writeln!(stdout, "{}", serde_json::json!({ "report": value }))?;
            }
        }

        let state = build_ui_state(session)?;
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(session: &DeskSession) -> Result<UiState> {
    Ok(UiState {
        session_id: session.session_id.clone(),
        current_user: session.current_user().cloned(),
        complaints: session.complaints()?,
        departments: session.departments()?,
        stats: session.stats()?,
    })
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
