//! Browser adapter for the energy monitor dashboard.
//!
//! Renders toasts into the live page and exposes them to page scripts:
//!
//! ```js
//! import init, { showToast } from "./pkg/emon_adapter_web.js";
//! await init();
//! showToast("Device saved", "success");
//! ```
//!
//! On start, every `<form>` on the page is wired to the required-field
//! check, which reports blank fields through an error toast.

use std::cell::OnceCell;

use emon_app::services::toast_manager::ToastManager;
use emon_domain::toast::ToastKind;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

pub mod document;
pub mod error;
pub mod forms;
pub mod timer;
mod utils;

pub use document::WebDocument;
pub use error::WebError;
pub use timer::GlooScheduler;

use error::to_js;
use utils::{get_document, set_panic_hook};

/// The toast manager as wired for the browser.
pub type WebToasts = ToastManager<WebDocument, GlooScheduler>;

thread_local! {
    static TOASTS: OnceCell<WebToasts> = const { OnceCell::new() };
}

/// The page's single toast manager, created on first use.
///
/// # Errors
///
/// Fails outside a browser page.
pub fn toasts() -> Result<WebToasts, WebError> {
    TOASTS.with(|cell| {
        if let Some(toasts) = cell.get() {
            return Ok(toasts.clone());
        }
        let toasts = ToastManager::new(WebDocument::new(get_document()?), GlooScheduler);
        Ok(cell.get_or_init(|| toasts).clone())
    })
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    set_panic_hook();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    let document = get_document()?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = start() {
                tracing::error!("failed to start toast adapter: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    start()?;
    Ok(())
}

fn start() -> Result<(), WebError> {
    let document = get_document()?;
    let wired = forms::wire_forms(&document, toasts()?)?;
    tracing::info!(forms = wired, "toast adapter ready");
    Ok(())
}

/// Show a toast. `kind` is `info` (default), `success`, `warning` or
/// `error`; anything else shows an info toast.
///
/// # Errors
///
/// Throws when the page has no `<head>` or `<body>` to host the toast.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let kind = kind.map_or(ToastKind::Info, ToastKind::from);
    toasts()?
        .show_toast(message, kind)
        .map(|_| ())
        .map_err(|err| to_js(&err))
}
