//! Markup description of a rendered toast.
//!
//! Adapters build real nodes from a [`ToastView`]; [`ToastView::to_html`]
//! gives the equivalent serialised form for snapshots and previews.

use std::fmt::Write as _;

use super::{ToastKind, icon_for};
use crate::id::ToastId;

/// Class of the manual-dismiss affordance inside a toast.
pub const CLOSE_CLASS: &str = "toast-close";

/// Text of the close button (a multiplication sign).
pub const CLOSE_LABEL: &str = "\u{00D7}";

/// Everything an adapter needs to build the DOM for one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    /// `id` attribute of the root element.
    pub dom_id: String,
    /// Class list of the root element, e.g. `toast toast-success`.
    pub root_class: String,
    /// Class list of the `<i>` icon element, e.g. `fas fa-check-circle`.
    pub icon_class: String,
    /// Message, as plain text.
    pub message: String,
}

impl ToastView {
    /// Describe the element for a toast of `kind` showing `message`.
    #[must_use]
    pub fn new(id: ToastId, kind: ToastKind, message: &str) -> Self {
        Self {
            dom_id: id.dom_id(),
            root_class: format!("toast {}", kind.css_class()),
            icon_class: format!("fas {}", icon_for(kind).css_class()),
            message: message.to_string(),
        }
    }

    /// Serialise to HTML, escaping the message. `animation` becomes the
    /// root's inline `animation` style once the exit animation started.
    #[must_use]
    pub fn to_html(&self, animation: Option<&str>) -> String {
        let mut out = format!(r#"<div id="{}" class="{}""#, self.dom_id, self.root_class);
        if let Some(animation) = animation {
            let _ = write!(out, r#" style="animation: {animation};""#);
        }
        let _ = write!(
            out,
            r#"><div class="toast-content"><i class="{}"></i><span>{}</span></div><button class="{CLOSE_CLASS}">{CLOSE_LABEL}</button></div>"#,
            self.icon_class,
            escape_html(&self.message),
        );
        out
    }
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
