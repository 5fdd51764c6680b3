//! Core library entry point that wires together the Osra dashboard subsystems.
//!
//! Each module is intentionally kept lightweight so that the boundaries
//! between responsibilities remain obvious when exploring the codebase:
//! - [`api`] exposes the IPC surface that the Tauri UI invokes.
//! - [`catalog`] holds the localized mock datasets the pages render.
//! - [`errors`] keeps the central error catalogue with human friendly metadata.
//! - [`i18n`] owns the two supported languages and the UI string catalog.
//! - [`inspiration`] fetches the daily verse with a deterministic fallback.
//! - [`logging`] records structured diagnostics to the in-memory event journal.
//! - [`state`] owns the session-scoped dashboard state and its resets.

pub mod api;
pub mod catalog;
pub mod errors;
pub mod i18n;
pub mod inspiration;
pub mod logging;
pub mod state;
