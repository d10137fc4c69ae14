//! Toast lifecycle states.

use std::fmt;

/// Where a toast is in its lifecycle.
///
/// Transitions only move forward, one step at a time:
/// `Showing → Dismissing → Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastState {
    /// Visible and waiting for a dismiss trigger.
    Showing,
    /// Exit animation running; removal is scheduled.
    Dismissing,
    /// Detached from the document. Terminal.
    Removed,
}

impl ToastState {
    fn next(self) -> Option<Self> {
        match self {
            Self::Showing => Some(Self::Dismissing),
            Self::Dismissing => Some(Self::Removed),
            Self::Removed => None,
        }
    }

    /// Advance to `target` if it is the immediate successor of the
    /// current state. Returns whether the state changed.
    pub(crate) fn advance_to(&mut self, target: Self) -> bool {
        if self.next() == Some(target) {
            *self = target;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for ToastState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Showing => "showing",
            Self::Dismissing => "dismissing",
            Self::Removed => "removed",
        })
    }
}

/// What started a toast's dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissTrigger {
    /// The close affordance was activated.
    User,
    /// The auto-dismiss deadline elapsed.
    Timeout,
}

impl fmt::Display for DismissTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Timeout => "timeout",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_advance_one_step_at_a_time() {
        let mut state = ToastState::Showing;
        assert!(!state.advance_to(ToastState::Removed));
        assert!(state.advance_to(ToastState::Dismissing));
        assert!(state.advance_to(ToastState::Removed));
        assert_eq!(state, ToastState::Removed);
    }

    #[test]
    fn should_never_leave_removed() {
        let mut state = ToastState::Removed;
        for target in [ToastState::Showing, ToastState::Dismissing, ToastState::Removed] {
            assert!(!state.advance_to(target));
        }
    }
}
