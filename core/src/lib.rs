//! Core of the Vaani municipal complaint desk demo.
//!
//! Citizens file complaints, a stubbed classifier routes each one to a
//! department, department staff move statuses, and the admin view reads
//! analytics derived from the current snapshot. Everything belongs to one
//! in-memory session and is gone when the session ends.

pub mod account;
pub mod analytics;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod intake;
pub mod registry;
pub mod report;
pub mod rng;
pub mod session;
pub mod store;
pub mod types;
