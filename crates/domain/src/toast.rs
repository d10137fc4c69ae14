//! Toast — a transient, auto-dismissing notification rendered over the page.
//!
//! A toast moves through `showing → dismissing → removed` exactly once. The
//! move out of `showing` is triggered by whichever comes first: the user
//! activating the close affordance or the auto-dismiss deadline.

mod icon;
mod kind;
mod lifecycle;
mod markup;
mod style;
mod timing;

pub use icon::{ToastIcon, icon_for};
pub use kind::ToastKind;
pub use lifecycle::{DismissTrigger, ToastState};
pub use markup::{CLOSE_CLASS, CLOSE_LABEL, ToastView, escape_html};
pub use style::{STYLE_MARKER_ID, TOAST_STYLESHEET, exit_animation};
pub use timing::ToastTimings;

use chrono::{DateTime, Utc};

use crate::id::ToastId;

/// A single notification and where it is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique identifier.
    pub id: ToastId,
    /// Text shown to the user. Displayed as-is, never parsed as markup.
    pub message: String,
    /// Selects the border colour and the icon.
    pub kind: ToastKind,
    /// When the toast was shown; the auto-dismiss deadline counts from here.
    pub created_at: DateTime<Utc>,
    state: ToastState,
    dismissed_by: Option<DismissTrigger>,
}

impl Toast {
    /// Create a toast in the [`ToastState::Showing`] state.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
            state: ToastState::Showing,
            dismissed_by: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }

    /// The trigger that won the race into `dismissing`, if any.
    #[must_use]
    pub fn dismissed_by(&self) -> Option<DismissTrigger> {
        self.dismissed_by
    }

    /// Move from `showing` to `dismissing`.
    ///
    /// Returns `false` (and records nothing) when the toast already left
    /// `showing`; the losing trigger of the dismiss race lands here.
    pub fn begin_dismiss(&mut self, trigger: DismissTrigger) -> bool {
        if self.state.advance_to(ToastState::Dismissing) {
            self.dismissed_by = Some(trigger);
            true
        } else {
            false
        }
    }

    /// Move from `dismissing` to the terminal `removed` state.
    pub fn finish_removal(&mut self) -> bool {
        self.state.advance_to(ToastState::Removed)
    }

    /// Describe the element that renders this toast.
    #[must_use]
    pub fn view(&self) -> ToastView {
        ToastView::new(self.id, self.kind, &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_in_showing_state() {
        let toast = Toast::new("Saved", ToastKind::Success);
        assert_eq!(toast.state(), ToastState::Showing);
        assert_eq!(toast.dismissed_by(), None);
        assert_eq!(toast.message, "Saved");
    }

    #[test]
    fn should_record_first_trigger_only() {
        let mut toast = Toast::new("Saved", ToastKind::Success);
        assert!(toast.begin_dismiss(DismissTrigger::User));
        assert!(!toast.begin_dismiss(DismissTrigger::Timeout));
        assert_eq!(toast.state(), ToastState::Dismissing);
        assert_eq!(toast.dismissed_by(), Some(DismissTrigger::User));
    }

    #[test]
    fn should_not_remove_before_dismissing() {
        let mut toast = Toast::new("hello", ToastKind::Info);
        assert!(!toast.finish_removal());
        assert_eq!(toast.state(), ToastState::Showing);
    }

    #[test]
    fn should_reach_removed_exactly_once() {
        let mut toast = Toast::new("hello", ToastKind::Info);
        toast.begin_dismiss(DismissTrigger::Timeout);
        assert!(toast.finish_removal());
        assert!(!toast.finish_removal());
        assert!(!toast.begin_dismiss(DismissTrigger::User));
        assert_eq!(toast.state(), ToastState::Removed);
    }

    #[test]
    fn should_build_view_carrying_id_and_message() {
        let toast = Toast::new("Please fill in all required fields", ToastKind::Error);
        let view = toast.view();
        assert_eq!(view.dom_id, toast.id.dom_id());
        assert_eq!(view.message, "Please fill in all required fields");
        assert_eq!(view.root_class, "toast toast-error");
    }
}
