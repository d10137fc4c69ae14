//! Scheduler port — one-shot delayed tasks.

use std::rc::Rc;
use std::time::Duration;

/// Work to run once a delay has elapsed.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks on the page's event loop after a delay.
///
/// Tasks never run before `schedule` returns, and never concurrently with
/// each other. Two tasks due at the same instant run in scheduling order.
pub trait Scheduler {
    /// Run `task` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task);
}

impl<T: Scheduler> Scheduler for Rc<T> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task);
    }
}
