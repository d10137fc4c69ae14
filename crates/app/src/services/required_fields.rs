//! Required-field guard — blocks a form submission with blank required
//! fields and tells the user through an error toast.

use emon_domain::form::{FieldInput, REQUIRED_FIELDS_MESSAGE, missing_required_fields};
use emon_domain::toast::ToastKind;

use crate::ports::{Document, Scheduler};
use crate::services::toast_manager::ToastManager;

/// Use-case run on every form submission.
pub struct RequiredFieldsGuard<D: Document, S> {
    toasts: ToastManager<D, S>,
}

impl<D, S> RequiredFieldsGuard<D, S>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    /// Create a guard reporting through `toasts`.
    pub fn new(toasts: ToastManager<D, S>) -> Self {
        Self { toasts }
    }

    /// Check `fields` before submission.
    ///
    /// Returns the names of the blank required fields; the submission may
    /// proceed only when the list is empty. A non-empty list also shows
    /// one error toast. The list is returned even when the toast cannot be
    /// shown, so the caller still blocks the submission.
    #[must_use]
    pub fn check<'a>(&self, fields: &[FieldInput<'a>]) -> Vec<&'a str> {
        let missing = missing_required_fields(fields);
        if !missing.is_empty() {
            tracing::debug!(fields = ?missing, "submission blocked");
            if let Err(err) = self
                .toasts
                .show_toast(REQUIRED_FIELDS_MESSAGE, ToastKind::Error)
            {
                tracing::warn!(error = %err, "failed to show required-fields toast");
            }
        }
        missing
    }
}
