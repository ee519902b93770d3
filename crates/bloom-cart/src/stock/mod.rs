//! Stock reconciliation module.
//!
//! Contains the stock-check collaborator, issue classification, the
//! reconciliation protocol, and its trigger scheduler.

mod client;
mod issue;
mod reconcile;
mod scheduler;

pub use client::{StockLevel, StockSource};
pub use issue::{IssueKind, StockIssue};
pub use reconcile::{PassOutcome, Reconciler, Resolution, ResolveMode, SyncConfig, SyncTrigger};
pub use scheduler::SyncScheduler;
