//! Manually driven clock.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use emon_app::ports::{Scheduler, Task};

/// A [`Scheduler`] whose time only moves on [`VirtualClock::advance`].
///
/// Tasks due at the same instant run in the order they were scheduled.
/// Tasks scheduled while advancing run within the same advance if they
/// fall due before its end.
#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<ClockState>,
}

#[derive(Default)]
struct ClockState {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

impl VirtualClock {
    /// A clock at time zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Due time of the next task, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.inner.pending.borrow().iter().map(|p| p.due).min()
    }

    /// Move time forward by `by`, running every task that falls due.
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        while let Some(pending) = self.pop_due(target) {
            self.inner.now.set(pending.due);
            (pending.task)();
            ran += 1;
        }
        self.inner.now.set(target);
        ran
    }

    /// Advance until nothing is left to run. Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            ran += self.advance(due.saturating_sub(self.now()));
        }
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut pending = self.inner.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(index, _)| index)?;
        Some(pending.swap_remove(index))
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);
        let due = self.now() + delay;
        tracing::trace!(?due, seq, "task scheduled");
        self.inner
            .pending
            .borrow_mut()
            .push(Pending { due, seq, task });
    }
}

impl fmt::Debug for VirtualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualClock")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle = Rc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let log = Rc::clone(&handle);
            Box::new(move || log.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn should_not_run_task_before_due() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(5000), task("dismiss"));

        assert_eq!(clock.advance(ms(4999)), 0);
        assert!(log.borrow().is_empty());
        assert_eq!(clock.advance(ms(1)), 1);
        assert_eq!(*log.borrow(), vec!["dismiss"]);
        assert_eq!(clock.now(), ms(5000));
    }

    #[test]
    fn should_run_same_instant_tasks_in_scheduling_order() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(300), task("a"));
        clock.schedule(ms(100), task("b"));
        clock.schedule(ms(300), task("c"));

        clock.advance(ms(300));
        assert_eq!(*log.borrow(), vec!["b", "a", "c"]);
    }

    #[test]
    fn should_run_tasks_scheduled_during_advance() {
        let clock = VirtualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner_clock = clock.clone();
        let inner_log = Rc::clone(&log);
        clock.schedule(
            ms(5000),
            Box::new(move || {
                inner_log.borrow_mut().push(inner_clock.now());
                let log = Rc::clone(&inner_log);
                let at = inner_clock.clone();
                inner_clock.schedule(ms(300), Box::new(move || log.borrow_mut().push(at.now())));
            }),
        );

        assert_eq!(clock.advance(ms(6000)), 2);
        assert_eq!(*log.borrow(), vec![ms(5000), ms(5300)]);
        assert_eq!(clock.now(), ms(6000));
    }

    #[test]
    fn should_run_until_idle() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(10), task("x"));
        clock.schedule(ms(20), task("y"));

        assert_eq!(clock.run_until_idle(), 2);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), ms(20));
        assert_eq!(*log.borrow(), vec!["x", "y"]);
    }

    #[test]
    fn should_report_next_due() {
        let clock = VirtualClock::new();
        assert_eq!(clock.next_due(), None);
        clock.advance(ms(50));
        clock.schedule(ms(100), Box::new(|| {}));
        assert_eq!(clock.next_due(), Some(ms(150)));
    }
}
