//! # emon-preview — toast preview
//!
//! Composition root that wires the toast manager to the virtual adapters
//! and replays a scenario of toasts on a virtual clock, printing the page
//! every time it changes.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise logging
//! - Construct the virtual document and clock (adapters)
//! - Construct the toast manager, injecting the adapters via port traits
//! - Play the scenario and print the resulting frames and final page
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;
mod preview;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::preview::Preview;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        auto_dismiss_ms = config.toast.auto_dismiss_ms,
        exit_animation_ms = config.toast.exit_animation_ms,
        toasts = config.preview.scenario.len(),
        "replaying toast scenario"
    );

    let preview = Preview::new(config.toast);
    preview.load(&config.preview.scenario);
    let frames = preview.run(config.preview.step());

    for frame in &frames {
        println!("{frame}");
    }
    println!("{}", preview.document().to_html());

    tracing::info!(frames = frames.len(), "scenario finished");
    Ok(())
}
