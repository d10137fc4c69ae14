//! Browser adapter error types.

use emon_domain::error::EmonError;
use wasm_bindgen::JsValue;

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A DOM call threw; holds the debug rendering of the thrown value.
    #[error("DOM call failed: {0}")]
    Js(String),

    /// There is no global `window` (not running in a browser page).
    #[error("no global `window` exists")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// A generated toast lost its close button.
    #[error("toast has no close button")]
    MissingCloseButton,
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<WebError> for EmonError {
    fn from(err: WebError) -> Self {
        EmonError::Document(Box::new(err))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Hand a domain error back to JavaScript as an exception message.
pub fn to_js(err: &EmonError) -> JsValue {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    JsValue::from_str(&message)
}
