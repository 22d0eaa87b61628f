//! Tenant screening core shared by the dashboard API and CLI.
//!
//! The `screening` module owns the only logic with semantics of its own: the
//! weighted applicant score and the case-insensitive record search used by every
//! list page. Everything else in this crate is the ambient service plumbing.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
