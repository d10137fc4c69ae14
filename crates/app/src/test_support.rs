//! In-memory [`Document`] used by the service tests.

use std::cell::{Cell, RefCell};

use emon_domain::error::EmonError;
use emon_domain::toast::ToastView;

use crate::ports::{CloseHandler, Document};

#[derive(Debug, Clone)]
pub struct NodeSnapshot {
    pub root_class: String,
    pub icon_class: String,
    pub message: String,
    pub animation: Option<String>,
}

struct FakeNode {
    snapshot: NodeSnapshot,
    attached: bool,
    on_close: Option<CloseHandler>,
}

pub struct FakeDocument {
    has_body: bool,
    styles: RefCell<Vec<String>>,
    nodes: RefCell<Vec<FakeNode>>,
    animation_calls: Cell<usize>,
    detach_calls: Cell<usize>,
    // Page code run synchronously whenever an animation starts.
    animation_hook: RefCell<Option<Box<dyn FnMut()>>>,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self {
            has_body: true,
            styles: RefCell::new(Vec::new()),
            nodes: RefCell::new(Vec::new()),
            animation_calls: Cell::new(0),
            detach_calls: Cell::new(0),
            animation_hook: RefCell::new(None),
        }
    }
}

impl FakeDocument {
    pub fn without_body() -> Self {
        Self {
            has_body: false,
            ..Self::default()
        }
    }

    pub fn style_count(&self, marker_id: &str) -> usize {
        self.styles
            .borrow()
            .iter()
            .filter(|id| id.as_str() == marker_id)
            .count()
    }

    pub fn attached(&self) -> Vec<NodeSnapshot> {
        self.nodes
            .borrow()
            .iter()
            .filter(|node| node.attached)
            .map(|node| node.snapshot.clone())
            .collect()
    }

    pub fn animation_calls(&self) -> usize {
        self.animation_calls.get()
    }

    pub fn detach_calls(&self) -> usize {
        self.detach_calls.get()
    }

    /// Click the close button of the `index`-th toast ever appended.
    pub fn click_close(&self, index: usize) {
        let handler = self.nodes.borrow_mut()[index].on_close.take();
        if let Some(mut handler) = handler {
            handler();
            self.nodes.borrow_mut()[index].on_close = Some(handler);
        }
    }

    /// Run `hook` from inside every later `set_animation` call.
    pub fn on_animation(&self, hook: impl FnMut() + 'static) {
        *self.animation_hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn remove_externally(&self, index: usize) {
        self.nodes.borrow_mut()[index].attached = false;
    }
}

impl Document for FakeDocument {
    type Node = usize;

    fn has_style(&self, marker_id: &str) -> bool {
        self.style_count(marker_id) > 0
    }

    fn inject_style(&self, marker_id: &str, _css: &str) -> Result<(), EmonError> {
        self.styles.borrow_mut().push(marker_id.to_string());
        Ok(())
    }

    fn append_toast(&self, view: &ToastView) -> Result<usize, EmonError> {
        if !self.has_body {
            return Err(EmonError::MissingBody);
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            snapshot: NodeSnapshot {
                root_class: view.root_class.clone(),
                icon_class: view.icon_class.clone(),
                message: view.message.clone(),
                animation: None,
            },
            attached: true,
            on_close: None,
        });
        Ok(nodes.len() - 1)
    }

    fn on_close(&self, node: &usize, handler: CloseHandler) -> Result<(), EmonError> {
        self.nodes.borrow_mut()[*node].on_close = Some(handler);
        Ok(())
    }

    fn is_attached(&self, node: &usize) -> bool {
        self.nodes.borrow()[*node].attached
    }

    fn set_animation(&self, node: &usize, animation: &str) {
        self.animation_calls.set(self.animation_calls.get() + 1);
        self.nodes.borrow_mut()[*node].snapshot.animation = Some(animation.to_string());
        let hook = self.animation_hook.borrow_mut().take();
        if let Some(mut hook) = hook {
            hook();
            *self.animation_hook.borrow_mut() = Some(hook);
        }
    }

    fn detach(&self, node: &usize) {
        self.detach_calls.set(self.detach_calls.get() + 1);
        self.nodes.borrow_mut()[*node].attached = false;
    }
}
