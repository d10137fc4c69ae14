//! # emon-domain
//!
//! Pure domain model for the energy monitor's toast notifications.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **toast kinds** and the icon each one carries
//! - Define the **toast lifecycle** (showing → dismissing → removed)
//! - Describe the **markup** of a toast and the shared stylesheet
//! - Hold the required-field check that reports failures through a toast
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The DOM and the timer are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod form;
pub mod toast;
