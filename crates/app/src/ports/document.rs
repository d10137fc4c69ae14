//! Document port — the page toasts are rendered into.

use std::rc::Rc;

use emon_domain::error::EmonError;
use emon_domain::toast::ToastView;

/// Callback run when a toast's close affordance is activated.
///
/// It may run several times if the user clicks repeatedly; the handler is
/// expected to be idempotent.
pub type CloseHandler = Box<dyn FnMut()>;

/// The subset of a DOM the toast manager needs.
///
/// Implementations are single-threaded and must not hold internal borrows
/// while invoking a [`CloseHandler`], since the handler calls back into the
/// document.
pub trait Document {
    /// Handle to a toast's root element.
    type Node: Clone;

    /// Whether a `<style>` element with id `marker_id` is present.
    fn has_style(&self, marker_id: &str) -> bool;

    /// Add a `<style id="{marker_id}">` holding `css` to the document head.
    ///
    /// # Errors
    ///
    /// Returns [`EmonError::MissingHead`] when there is no head, or an
    /// adapter error when the element cannot be created.
    fn inject_style(&self, marker_id: &str, css: &str) -> Result<(), EmonError>;

    /// Build the element described by `view` and append it at the end of
    /// the body.
    ///
    /// # Errors
    ///
    /// Returns [`EmonError::MissingBody`] when there is no body, or an
    /// adapter error when the element cannot be created.
    fn append_toast(&self, view: &ToastView) -> Result<Self::Node, EmonError>;

    /// Run `handler` whenever the close affordance inside `node` is activated.
    ///
    /// # Errors
    ///
    /// Returns an adapter error when the listener cannot be registered.
    fn on_close(&self, node: &Self::Node, handler: CloseHandler) -> Result<(), EmonError>;

    /// Whether `node` is still attached to its parent.
    fn is_attached(&self, node: &Self::Node) -> bool;

    /// Set the inline `animation` of `node`.
    fn set_animation(&self, node: &Self::Node, animation: &str);

    /// Detach `node` from the document. Detaching twice is a no-op.
    fn detach(&self, node: &Self::Node);
}

impl<T: Document> Document for Rc<T> {
    type Node = T::Node;

    fn has_style(&self, marker_id: &str) -> bool {
        (**self).has_style(marker_id)
    }

    fn inject_style(&self, marker_id: &str, css: &str) -> Result<(), EmonError> {
        (**self).inject_style(marker_id, css)
    }

    fn append_toast(&self, view: &ToastView) -> Result<Self::Node, EmonError> {
        (**self).append_toast(view)
    }

    fn on_close(&self, node: &Self::Node, handler: CloseHandler) -> Result<(), EmonError> {
        (**self).on_close(node, handler)
    }

    fn is_attached(&self, node: &Self::Node) -> bool {
        (**self).is_attached(node)
    }

    fn set_animation(&self, node: &Self::Node, animation: &str) {
        (**self).set_animation(node, animation);
    }

    fn detach(&self, node: &Self::Node) {
        (**self).detach(node);
    }
}
