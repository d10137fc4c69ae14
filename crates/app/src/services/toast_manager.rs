//! Toast manager — creates, stacks and retires toast notifications.
//!
//! Every toast is dismissed by whichever comes first: its close affordance
//! or the auto-dismiss timer. The other path is not cancelled; it reaches
//! a guard (toast still `showing` and its node still attached) and turns
//! into a no-op, so a toast is animated out and detached exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use emon_domain::error::EmonError;
use emon_domain::id::ToastId;
use emon_domain::toast::{
    DismissTrigger, STYLE_MARKER_ID, TOAST_STYLESHEET, Toast, ToastKind, ToastState,
    ToastTimings, exit_animation,
};

use crate::ports::{Document, Scheduler};

/// Application service owning every toast on a page.
///
/// Cloning is cheap and yields a handle to the same set of toasts.
pub struct ToastManager<D: Document, S> {
    inner: Rc<Inner<D, S>>,
}

impl<D: Document, S> Clone for ToastManager<D, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<D: Document, S> {
    document: D,
    scheduler: S,
    timings: ToastTimings,
    styles_ready: Cell<bool>,
    // Insertion order, which is also the stacking order in the body.
    active: RefCell<Vec<ActiveToast<D::Node>>>,
}

struct ActiveToast<N> {
    toast: Toast,
    node: N,
}

impl<D, S> ToastManager<D, S>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    /// Create a manager with the default timings (5 s + 300 ms).
    pub fn new(document: D, scheduler: S) -> Self {
        Self::with_timings(document, scheduler, ToastTimings::default())
    }

    /// Create a manager with custom timings.
    pub fn with_timings(document: D, scheduler: S, timings: ToastTimings) -> Self {
        Self {
            inner: Rc::new(Inner {
                document,
                scheduler,
                timings,
                styles_ready: Cell::new(false),
                active: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Show a toast and schedule its automatic dismissal.
    ///
    /// `kind` accepts a [`ToastKind`] or any string; unknown names show an
    /// info toast. The returned id may be ignored.
    ///
    /// # Errors
    ///
    /// Only fails when the document cannot host toasts (no head or body,
    /// or the adapter rejects a DOM operation). Nothing is left attached
    /// in that case.
    pub fn show_toast(
        &self,
        message: impl Into<String>,
        kind: impl Into<ToastKind>,
    ) -> Result<ToastId, EmonError> {
        let toast = Toast::new(message, kind.into());
        let id = toast.id;
        let inner = &self.inner;

        inner.ensure_styles()?;
        let node = inner.document.append_toast(&toast.view())?;

        // The document owns the handler, so it only holds a weak reference.
        let weak = Rc::downgrade(inner);
        let on_close = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                Inner::dismiss(&inner, id, DismissTrigger::User);
            }
        });
        if let Err(err) = inner.document.on_close(&node, on_close) {
            inner.document.detach(&node);
            return Err(err);
        }

        tracing::debug!(toast_id = %id, kind = %toast.kind, "toast shown");
        inner.active.borrow_mut().push(ActiveToast { toast, node });

        let this = Rc::clone(inner);
        inner.scheduler.schedule(
            inner.timings.auto_dismiss(),
            Box::new(move || {
                Inner::dismiss(&this, id, DismissTrigger::Timeout);
            }),
        );

        Ok(id)
    }

    /// Dismiss a toast as if its close affordance had been activated.
    ///
    /// Returns `false` when the toast is already dismissing or gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        Inner::dismiss(&self.inner, id, DismissTrigger::User)
    }

    /// Lifecycle state of a toast, or `None` once it has been removed.
    #[must_use]
    pub fn state(&self, id: ToastId) -> Option<ToastState> {
        self.inner
            .active
            .borrow()
            .iter()
            .find(|entry| entry.toast.id == id)
            .map(|entry| entry.toast.state())
    }

    /// Ids of the toasts not yet removed, oldest first.
    #[must_use]
    pub fn active_toasts(&self) -> Vec<ToastId> {
        self.inner
            .active
            .borrow()
            .iter()
            .map(|entry| entry.toast.id)
            .collect()
    }

    /// Number of toasts not yet removed.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.inner.active.borrow().len()
    }
}

impl<D, S> Inner<D, S>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    fn ensure_styles(&self) -> Result<(), EmonError> {
        if self.styles_ready.get() {
            return Ok(());
        }
        if !self.document.has_style(STYLE_MARKER_ID) {
            self.document
                .inject_style(STYLE_MARKER_ID, TOAST_STYLESHEET)?;
            tracing::debug!(marker = STYLE_MARKER_ID, "toast stylesheet injected");
        }
        self.styles_ready.set(true);
        Ok(())
    }

    fn dismiss(this: &Rc<Self>, id: ToastId, trigger: DismissTrigger) -> bool {
        // No borrow of `active` is held across document calls: adapters may
        // run page code that shows another toast.
        let Some(node) = this.node_of(id) else {
            tracing::trace!(toast_id = %id, %trigger, "dismiss ignored, toast already removed");
            return false;
        };

        if !this.document.is_attached(&node) {
            this.forget(id);
            // Lets the adapter release what it still holds for the node.
            this.document.detach(&node);
            tracing::debug!(toast_id = %id, "toast detached by someone else, forgetting it");
            return false;
        }

        let began = {
            let mut active = this.active.borrow_mut();
            active
                .iter_mut()
                .find(|entry| entry.toast.id == id)
                .map(|entry| (entry.toast.begin_dismiss(trigger), entry.toast.state()))
        };
        match began {
            Some((true, _)) => {}
            Some((false, state)) => {
                tracing::trace!(toast_id = %id, %trigger, %state, "dismiss ignored");
                return false;
            }
            None => return false,
        }

        this.document
            .set_animation(&node, &exit_animation(this.timings.exit_animation()));

        tracing::debug!(toast_id = %id, %trigger, "toast dismissing");
        let inner = Rc::clone(this);
        this.scheduler.schedule(
            this.timings.exit_animation(),
            Box::new(move || inner.finish_removal(id)),
        );
        true
    }

    fn node_of(&self, id: ToastId) -> Option<D::Node> {
        self.active
            .borrow()
            .iter()
            .find(|entry| entry.toast.id == id)
            .map(|entry| entry.node.clone())
    }

    fn forget(&self, id: ToastId) -> Option<ActiveToast<D::Node>> {
        let mut active = self.active.borrow_mut();
        let pos = active.iter().position(|entry| entry.toast.id == id)?;
        Some(active.remove(pos))
    }

    fn finish_removal(&self, id: ToastId) {
        let Some(mut entry) = self.forget(id) else {
            return;
        };

        entry.toast.finish_removal();
        self.document.detach(&entry.node);
        tracing::debug!(
            toast_id = %id,
            dismissed_by = ?entry.toast.dismissed_by(),
            "toast removed"
        );
    }
}
