//! Dismissal timings.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

/// How long toasts stay up and how long they take to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Delay from creation to the automatic dismiss, in milliseconds.
    pub auto_dismiss_ms: u64,
    /// Length of the exit animation before detachment, in milliseconds.
    pub exit_animation_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            exit_animation_ms: 300,
        }
    }
}

impl ToastTimings {
    /// Delay before the automatic dismiss.
    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.auto_dismiss_ms)
    }

    /// Exit animation length.
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }

    /// Check the timings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroAutoDismiss`] when the auto-dismiss
    /// delay is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.auto_dismiss_ms == 0 {
            return Err(ValidationError::ZeroAutoDismiss);
        }
        Ok(())
    }
}
