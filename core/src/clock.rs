//! Session clock — owns the session's notion of "now".
//!
//! A system clock follows wall time; a manual clock moves only when a
//! test advances it, so timestamp assertions stay exact.

use crate::types::{SessionId, TimestampMs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClock {
    pub session_id: SessionId,
    mode: ClockMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum ClockMode {
    System,
    Manual { now_ms: TimestampMs },
}

impl SessionClock {
    pub fn system(session_id: SessionId) -> Self {
        Self {
            session_id,
            mode: ClockMode::System,
        }
    }

    pub fn manual(session_id: SessionId, start_ms: TimestampMs) -> Self {
        Self {
            session_id,
            mode: ClockMode::Manual { now_ms: start_ms },
        }
    }

    pub fn now_ms(&self) -> TimestampMs {
        match self.mode {
            ClockMode::System => chrono::Utc::now().timestamp_millis(),
            ClockMode::Manual { now_ms } => now_ms,
        }
    }

    /// Advance a manual clock. Returns the new time.
    /// Panics on a system clock — callers must know which mode they hold.
    pub fn advance(&mut self, delta_ms: TimestampMs) -> TimestampMs {
        match &mut self.mode {
            ClockMode::Manual { now_ms } => {
                *now_ms += delta_ms;
                *now_ms
            }
            ClockMode::System => panic!("advance() called on system clock"),
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self.mode, ClockMode::Manual { .. })
    }
}
