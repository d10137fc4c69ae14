//! In-process scheduler backed by tokio's local task set.

use std::time::Duration;

use crate::ports::{Scheduler, Task};

/// [`Scheduler`] that sleeps on tokio's timer and runs tasks on the
/// current thread.
///
/// Must be used from inside a [`tokio::task::LocalSet`], since tasks are
/// `!Send` and spawned with [`tokio::task::spawn_local`]. With a paused
/// runtime clock (`start_paused = true`) the delays elapse instantly and
/// deterministically, which is how tests drive it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokioScheduler;

impl Scheduler for LocalTokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
