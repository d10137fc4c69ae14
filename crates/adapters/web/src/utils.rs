//! Small DOM helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::WebError;

pub fn set_panic_hook() {
    // Call once during initialisation; with the feature enabled, panics are
    // reported through `console.error` instead of an opaque `unreachable`.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_document() -> Result<Document, WebError> {
    web_sys::window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)
}

pub fn create_element_with_class(
    document: &Document,
    name: &str,
    class: &str,
) -> Result<Element, WebError> {
    let element = document.create_element(name)?;
    element.set_class_name(class);
    Ok(element)
}

/// Set (or clear, with `None`) one inline style property.
pub fn set_style(element: &Element, property: &str, value: Option<&str>) -> Result<(), WebError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    match value {
        Some(value) => style.set_property(property, value)?,
        None => {
            style.remove_property(property)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_get_document() {
        assert!(get_document().is_ok());
    }

    #[wasm_bindgen_test]
    fn should_set_and_clear_inline_style() {
        let document = get_document().unwrap();
        let element = create_element_with_class(&document, "input", "field").unwrap();

        set_style(&element, "border-color", Some("#f44336")).unwrap();
        let html = element.dyn_ref::<HtmlElement>().unwrap();
        assert_eq!(
            html.style().get_property_value("border-color").unwrap(),
            "rgb(244, 67, 54)"
        );

        set_style(&element, "border-color", None).unwrap();
        assert_eq!(html.style().get_property_value("border-color").unwrap(), "");
    }
}
