//! [`Document`] implementation over the live DOM.

use std::cell::RefCell;
use std::collections::HashMap;

use emon_app::ports::{CloseHandler, Document};
use emon_domain::error::EmonError;
use emon_domain::toast::{CLOSE_CLASS, CLOSE_LABEL, ToastView};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

use crate::error::WebError;
use crate::utils::{create_element_with_class, set_style};

/// The page's `document`, seen through the toast manager's port.
pub struct WebDocument {
    document: web_sys::Document,
    // Click listeners keyed by toast DOM id; dropped when the toast is detached.
    listeners: RefCell<HashMap<String, Closure<dyn FnMut()>>>,
}

impl WebDocument {
    /// Wrap `document`.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            listeners: RefCell::new(HashMap::new()),
        }
    }

    fn build_toast(&self, view: &ToastView) -> Result<Element, WebError> {
        let root = create_element_with_class(&self.document, "div", &view.root_class)?;
        root.set_id(&view.dom_id);

        let content = create_element_with_class(&self.document, "div", "toast-content")?;
        let icon = create_element_with_class(&self.document, "i", &view.icon_class)?;
        let text = self.document.create_element("span")?;
        // Text content, not markup: the message is never parsed as HTML.
        text.set_text_content(Some(&view.message));
        content.append_child(&icon)?;
        content.append_child(&text)?;

        let close = create_element_with_class(&self.document, "button", CLOSE_CLASS)?;
        close.set_text_content(Some(CLOSE_LABEL));

        root.append_child(&content)?;
        root.append_child(&close)?;
        Ok(root)
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn has_style(&self, marker_id: &str) -> bool {
        self.document.get_element_by_id(marker_id).is_some()
    }

    fn inject_style(&self, marker_id: &str, css: &str) -> Result<(), EmonError> {
        let head = self.document.head().ok_or(EmonError::MissingHead)?;
        let style = self
            .document
            .create_element("style")
            .map_err(WebError::from)?;
        style.set_id(marker_id);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(WebError::from)?;
        Ok(())
    }

    fn append_toast(&self, view: &ToastView) -> Result<Element, EmonError> {
        let body = self.document.body().ok_or(EmonError::MissingBody)?;
        let toast = self.build_toast(view)?;
        body.append_child(&toast).map_err(WebError::from)?;
        Ok(toast)
    }

    fn on_close(&self, node: &Element, mut handler: CloseHandler) -> Result<(), EmonError> {
        let button = node
            .query_selector(&format!(".{CLOSE_CLASS}"))
            .map_err(WebError::from)?
            .ok_or(WebError::MissingCloseButton)?;
        let listener = Closure::<dyn FnMut()>::new(move || handler());
        button
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(WebError::from)?;
        self.listeners.borrow_mut().insert(node.id(), listener);
        Ok(())
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.parent_node().is_some()
    }

    fn set_animation(&self, node: &Element, animation: &str) {
        if let Err(err) = set_style(node, "animation", Some(animation)) {
            tracing::warn!("failed to start toast exit animation: {err}");
        }
    }

    fn detach(&self, node: &Element) {
        node.remove();
        // Dropped outside the borrow: dropping a closure may run arbitrary drops.
        let listener = self.listeners.borrow_mut().remove(&node.id());
        drop(listener);
    }
}
