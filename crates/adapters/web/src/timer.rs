//! [`Scheduler`] backed by `setTimeout`.

use std::time::Duration;

use emon_app::ports::{Scheduler, Task};
use gloo_timers::callback::Timeout;

/// Longest delay `setTimeout` honours; larger values fire immediately.
const MAX_TIMEOUT_MS: u32 = i32::MAX.unsigned_abs();

/// Schedules tasks with the browser's `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        // Never cancelled: the handle is released and the browser keeps the timer.
        let _ = Timeout::new(timeout_millis(delay), task).forget();
    }
}

fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMEOUT_MS, |ms| ms.min(MAX_TIMEOUT_MS))
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn should_pass_short_delays_through() {
        assert_eq!(timeout_millis(Duration::from_millis(5000)), 5000);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
    }

    #[wasm_bindgen_test]
    fn should_clamp_delays_beyond_set_timeout_range() {
        let just_over = Duration::from_millis(u64::from(MAX_TIMEOUT_MS) + 1);
        assert_eq!(timeout_millis(just_over), 2_147_483_647);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), 2_147_483_647);
    }
}
