//! # emon-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Document` — the page toasts are rendered into
//!   - `Scheduler` — one-shot delayed tasks on the page's event loop
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ToastManager` — show, dismiss and retire toasts
//!   - `RequiredFieldsGuard` — block a submission with blank required fields
//! - Provide **in-process infrastructure** (a tokio-backed scheduler) that doesn't need IO
//!
//! ## Concurrency
//! Everything here runs on a single thread: handlers hold `Rc`s and the
//! scheduler never runs a task concurrently with another one.
//!
//! ## Dependency rule
//! Depends on `emon-domain` only (plus `tokio` for the local scheduler).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod scheduler;
pub mod services;

#[cfg(test)]
mod test_support;
