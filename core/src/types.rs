//! Shared primitive types used across the desk core.

/// Milliseconds since the Unix epoch.
pub type TimestampMs = i64;

/// A stable, unique identifier for any entity in the session.
pub type EntityId = String;

/// The canonical session identifier.
pub type SessionId = String;
