//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All command output goes through this module so that quiet mode and
//! JSON output are handled the same way everywhere. Diagnostics go through
//! `tracing` instead.

pub mod output;
