//! # emon-adapter-virtual
//!
//! Virtual adapters that stand in for a browser page.
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`VirtualDocument`] | `Document` | In-memory head and body; clicks are simulated with [`VirtualDocument::click_close`] |
//! | [`VirtualClock`] | `Scheduler` | Time only moves when [`VirtualClock::advance`] is called |
//!
//! Both are cheap handles over shared state: clone one, give the clone to
//! the toast manager and keep the other to drive and inspect the page.
//!
//! ## Dependency rule
//!
//! Depends on `emon-app` (port traits) and `emon-domain` only.

mod clock;
mod document;

pub use clock::VirtualClock;
pub use document::{NodeId, ToastSnapshot, VirtualDocument};
