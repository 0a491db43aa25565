//! Presence reporting harness for FrankenGL.
//!
//! This crate provides:
//! - Presence reports: serializable snapshots of a binding table
//! - Report comparison: which entry points two hosts or drivers disagree on
//! - Requirement checks: fail when an application's entry points are missing
//! - Structured logs: one JSONL record per entry point or bind pass

#![forbid(unsafe_code)]

pub mod presence;
pub mod structured_log;

pub use presence::{DescriptorRow, PresenceDiff, PresenceEntry, PresenceReport, ReportError};
pub use structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
