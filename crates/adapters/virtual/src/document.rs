//! In-memory document.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use emon_app::ports::{CloseHandler, Document};
use emon_domain::error::EmonError;
use emon_domain::toast::ToastView;

/// Handle to a toast element in a [`VirtualDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a toast element currently looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSnapshot {
    /// `id` attribute.
    pub dom_id: String,
    /// Class list of the root element.
    pub root_class: String,
    /// Class list of the icon.
    pub icon_class: String,
    /// Message text.
    pub message: String,
    /// Inline `animation` value, once the exit animation started.
    pub animation: Option<String>,
}

struct Element {
    view: ToastView,
    animation: Option<String>,
    attached: bool,
    on_close: Option<CloseHandler>,
}

impl Element {
    fn snapshot(&self) -> ToastSnapshot {
        ToastSnapshot {
            dom_id: self.view.dom_id.clone(),
            root_class: self.view.root_class.clone(),
            icon_class: self.view.icon_class.clone(),
            message: self.view.message.clone(),
            animation: self.animation.clone(),
        }
    }
}

struct StyleElement {
    id: String,
    css: String,
}

#[derive(Default)]
struct Page {
    has_head: bool,
    has_body: bool,
    styles: Vec<StyleElement>,
    // Every toast ever appended, in order; detached ones stay as tombstones
    // so `NodeId`s remain valid.
    elements: Vec<Element>,
}

/// An in-memory page with a head and a body.
#[derive(Clone)]
pub struct VirtualDocument {
    page: Rc<RefCell<Page>>,
}

impl Default for VirtualDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDocument {
    /// An empty page with a head and a body.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(true, true)
    }

    /// A page that has not parsed its `<body>` yet.
    #[must_use]
    pub fn without_body() -> Self {
        Self::with_parts(true, false)
    }

    /// A page without a `<head>`.
    #[must_use]
    pub fn without_head() -> Self {
        Self::with_parts(false, true)
    }

    fn with_parts(has_head: bool, has_body: bool) -> Self {
        Self {
            page: Rc::new(RefCell::new(Page {
                has_head,
                has_body,
                ..Page::default()
            })),
        }
    }

    /// Number of `<style>` elements with id `marker_id`.
    #[must_use]
    pub fn style_count(&self, marker_id: &str) -> usize {
        self.page
            .borrow()
            .styles
            .iter()
            .filter(|style| style.id == marker_id)
            .count()
    }

    /// CSS text of the `<style>` element with id `marker_id`.
    #[must_use]
    pub fn style_text(&self, marker_id: &str) -> Option<String> {
        self.page
            .borrow()
            .styles
            .iter()
            .find(|style| style.id == marker_id)
            .map(|style| style.css.clone())
    }

    /// Toasts attached to the body, in body order.
    #[must_use]
    pub fn toasts(&self) -> Vec<ToastSnapshot> {
        self.page
            .borrow()
            .elements
            .iter()
            .filter(|element| element.attached)
            .map(Element::snapshot)
            .collect()
    }

    /// Find an attached toast by its `id` attribute.
    #[must_use]
    pub fn find(&self, dom_id: &str) -> Option<NodeId> {
        self.page
            .borrow()
            .elements
            .iter()
            .position(|element| element.attached && element.view.dom_id == dom_id)
            .map(NodeId)
    }

    /// Simulate a click on the close button of `node`.
    ///
    /// Returns `false` when the node is detached or has no handler.
    pub fn click_close(&self, node: NodeId) -> bool {
        let handler = {
            let mut page = self.page.borrow_mut();
            match page.elements.get_mut(node.0) {
                Some(element) if element.attached => element.on_close.take(),
                _ => None,
            }
        };
        let Some(mut handler) = handler else {
            return false;
        };

        handler();

        let mut page = self.page.borrow_mut();
        if let Some(element) = page.elements.get_mut(node.0)
            && element.attached
            && element.on_close.is_none()
        {
            element.on_close = Some(handler);
        }
        true
    }

    /// Remove `node` behind the toast manager's back.
    pub fn remove_externally(&self, node: NodeId) {
        self.detach(&node);
    }

    /// Serialise the page: styles in the head, toasts in the body.
    #[must_use]
    pub fn to_html(&self) -> String {
        let page = self.page.borrow();
        let mut out = String::from("<html><head>");
        for style in &page.styles {
            let _ = write!(out, r#"<style id="{}">…</style>"#, style.id);
        }
        out.push_str("</head><body>");
        for element in page.elements.iter().filter(|element| element.attached) {
            out.push_str(&element.view.to_html(element.animation.as_deref()));
        }
        out.push_str("</body></html>");
        out
    }
}

impl Document for VirtualDocument {
    type Node = NodeId;

    fn has_style(&self, marker_id: &str) -> bool {
        self.style_count(marker_id) > 0
    }

    fn inject_style(&self, marker_id: &str, css: &str) -> Result<(), EmonError> {
        let mut page = self.page.borrow_mut();
        if !page.has_head {
            return Err(EmonError::MissingHead);
        }
        page.styles.push(StyleElement {
            id: marker_id.to_string(),
            css: css.to_string(),
        });
        Ok(())
    }

    fn append_toast(&self, view: &ToastView) -> Result<NodeId, EmonError> {
        let mut page = self.page.borrow_mut();
        if !page.has_body {
            return Err(EmonError::MissingBody);
        }
        page.elements.push(Element {
            view: view.clone(),
            animation: None,
            attached: true,
            on_close: None,
        });
        Ok(NodeId(page.elements.len() - 1))
    }

    fn on_close(&self, node: &NodeId, handler: CloseHandler) -> Result<(), EmonError> {
        if let Some(element) = self.page.borrow_mut().elements.get_mut(node.0) {
            element.on_close = Some(handler);
        }
        Ok(())
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        self.page
            .borrow()
            .elements
            .get(node.0)
            .is_some_and(|element| element.attached)
    }

    fn set_animation(&self, node: &NodeId, animation: &str) {
        if let Some(element) = self.page.borrow_mut().elements.get_mut(node.0) {
            element.animation = Some(animation.to_string());
        }
    }

    fn detach(&self, node: &NodeId) {
        // Dropping the handler outside the borrow: it may own Rc'd state.
        let handler = {
            let mut page = self.page.borrow_mut();
            page.elements.get_mut(node.0).and_then(|element| {
                element.attached = false;
                element.on_close.take()
            })
        };
        if handler.is_some() {
            tracing::trace!(?node, "close handler released");
        }
    }
}
