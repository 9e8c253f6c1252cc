//! Host probing and workflow prerequisite checks
//!
//! This module provides:
//! - OS family detection and tool lookup on the search path (`host`, `tool`)
//! - Workflow validation against the probed host (`check`)

pub mod check;
pub mod host;
pub mod tool;

pub use check::{validate, MissingPrerequisites};
pub use host::{probe, probe_with, HostProfile, OsFamily, OsSignals};
pub use tool::Tool;
