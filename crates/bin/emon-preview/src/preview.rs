//! Scenario playback on the virtual page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use emon_adapter_virtual::{ToastSnapshot, VirtualClock, VirtualDocument};
use emon_app::ports::Scheduler;
use emon_app::services::toast_manager::ToastManager;
use emon_domain::id::ToastId;
use emon_domain::toast::ToastTimings;

use crate::config::ScenarioEntry;

type Manager = ToastManager<VirtualDocument, VirtualClock>;

/// The page as it looked at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Time since the start of playback.
    pub at: Duration,
    /// Toasts attached to the body, oldest first.
    pub toasts: Vec<ToastSnapshot>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@ {:>6} ms", self.at.as_millis())?;
        if self.toasts.is_empty() {
            return write!(f, "  (no toasts)");
        }
        for toast in &self.toasts {
            let phase = if toast.animation.is_some() {
                "leaving"
            } else {
                "showing"
            };
            write!(
                f,
                "\n    [{}] {} {:?} ({phase})",
                toast.root_class, toast.icon_class, toast.message
            )?;
        }
        Ok(())
    }
}

/// Replays [`ScenarioEntry`]s against a virtual page on a virtual clock.
pub struct Preview {
    clock: VirtualClock,
    document: VirtualDocument,
    manager: Manager,
}

impl Preview {
    /// A blank page whose toasts follow `timings`.
    #[must_use]
    pub fn new(timings: ToastTimings) -> Self {
        let clock = VirtualClock::new();
        let document = VirtualDocument::new();
        let manager = ToastManager::with_timings(document.clone(), clock.clone(), timings);
        Self {
            clock,
            document,
            manager,
        }
    }

    /// The page being played on.
    #[must_use]
    pub fn document(&self) -> &VirtualDocument {
        &self.document
    }

    /// Queue every entry of `scenario` on the clock. Times are relative to
    /// the clock's current time.
    pub fn load(&self, scenario: &[ScenarioEntry]) {
        let shown: Rc<RefCell<HashMap<usize, ToastId>>> = Rc::default();

        for (index, entry) in scenario.iter().enumerate() {
            let manager = self.manager.clone();
            let ids = Rc::clone(&shown);
            let show = entry.clone();
            self.clock.schedule(
                Duration::from_millis(show.at_ms),
                Box::new(move || match manager.show_toast(show.message, show.kind) {
                    Ok(id) => {
                        ids.borrow_mut().insert(index, id);
                    }
                    Err(err) => tracing::warn!(error = %err, index, "failed to show toast"),
                }),
            );

            if let Some(close_at_ms) = entry.close_at_ms {
                let document = self.document.clone();
                let ids = Rc::clone(&shown);
                let delay = Duration::from_millis(close_at_ms);
                self.clock.schedule(
                    delay,
                    Box::new(move || {
                        let node = ids
                            .borrow()
                            .get(&index)
                            .and_then(|id| document.find(&id.dom_id()));
                        match node {
                            Some(node) => {
                                tracing::info!(index, "closing toast");
                                document.click_close(node);
                            }
                            None => tracing::info!(index, "toast already gone, close skipped"),
                        }
                    }),
                );
            }
        }
    }

    /// Advance in `step` increments until nothing is scheduled, recording a
    /// frame each time the page changes.
    pub fn run(&self, step: Duration) -> Vec<Frame> {
        let mut frames: Vec<Frame> = Vec::new();
        loop {
            let toasts = self.document.toasts();
            if frames.last().is_none_or(|last| last.toasts != toasts) {
                frames.push(Frame {
                    at: self.clock.now(),
                    toasts,
                });
            }
            if self.clock.pending() == 0 {
                break;
            }
            self.clock.advance(step);
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use emon_domain::toast::ToastKind;

    use super::*;

    fn entry(at_ms: u64, message: &str, kind: ToastKind, close_at_ms: Option<u64>) -> ScenarioEntry {
        ScenarioEntry {
            at_ms,
            message: message.to_string(),
            kind,
            close_at_ms,
        }
    }

    #[test]
    fn should_record_show_dismiss_and_remove_frames() {
        let preview = Preview::new(ToastTimings::default());
        preview.load(&[entry(0, "Saved", ToastKind::Success, None)]);

        let frames = preview.run(Duration::from_millis(100));
        let times: Vec<u128> = frames.iter().map(|f| f.at.as_millis()).collect();
        // Shown at 0 (sampled after the first step), leaving at 5000, gone at 5300.
        assert_eq!(times, vec![0, 100, 5000, 5300]);
        assert!(frames[1].toasts[0].animation.is_none());
        assert!(frames[2].toasts[0].animation.is_some());
        assert!(frames[3].toasts.is_empty());
    }

    #[test]
    fn should_close_toast_at_requested_time() {
        let preview = Preview::new(ToastTimings::default());
        preview.load(&[entry(0, "Saved", ToastKind::Success, Some(1000))]);

        let frames = preview.run(Duration::from_millis(100));
        // The auto-dismiss at 5000 finds nothing to do, so no frame is added.
        let last = frames.last().unwrap();
        assert_eq!(last.at, Duration::from_millis(1300));
        assert!(last.toasts.is_empty());
        let leaving = frames
            .iter()
            .find(|f| f.toasts.first().is_some_and(|t| t.animation.is_some()))
            .unwrap();
        assert_eq!(leaving.at, Duration::from_millis(1000));
    }

    #[test]
    fn should_skip_close_of_toast_already_gone() {
        let preview = Preview::new(ToastTimings::default());
        preview.load(&[entry(0, "Saved", ToastKind::Success, Some(9000))]);

        let frames = preview.run(Duration::from_millis(500));
        assert!(frames.last().unwrap().toasts.is_empty());
        assert_eq!(preview.document().toasts().len(), 0);
    }

    #[test]
    fn should_format_frame_lines() {
        let frame = Frame {
            at: Duration::from_millis(5000),
            toasts: vec![ToastSnapshot {
                dom_id: "toast-1".to_string(),
                root_class: "toast toast-error".to_string(),
                icon_class: "fas fa-exclamation-circle".to_string(),
                message: "Please fill in all required fields".to_string(),
                animation: Some("slideOutRight 0.3s ease forwards".to_string()),
            }],
        };
        assert_eq!(
            frame.to_string(),
            "@   5000 ms\n    [toast toast-error] fas fa-exclamation-circle \"Please fill in all required fields\" (leaving)"
        );
    }

    #[test]
    fn should_format_empty_frame() {
        let frame = Frame {
            at: Duration::ZERO,
            toasts: Vec::new(),
        };
        assert_eq!(frame.to_string(), "@      0 ms  (no toasts)");
    }
}
