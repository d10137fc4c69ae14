//! Required-field validation for every form on the page.

use std::rc::Rc;

use emon_app::services::required_fields::RequiredFieldsGuard;
use emon_domain::form::{FieldInput, INVALID_BORDER_COLOR};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::WebToasts;
use crate::document::WebDocument;
use crate::error::WebError;
use crate::timer::GlooScheduler;
use crate::utils::set_style;

type Guard = RequiredFieldsGuard<WebDocument, GlooScheduler>;

/// Attach a submit listener to every `<form>` currently in `document`.
///
/// # Errors
///
/// Fails when the forms cannot be enumerated or a listener cannot be added.
pub fn wire_forms(document: &web_sys::Document, toasts: WebToasts) -> Result<usize, WebError> {
    let guard = Rc::new(Guard::new(toasts));
    let forms = document.query_selector_all("form")?;
    let mut wired = 0;
    for index in 0..forms.length() {
        let Some(form) = forms
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
        else {
            continue;
        };
        let guard = Rc::clone(&guard);
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Err(err) = on_submit(&guard, &event) {
                tracing::warn!("required-field check failed: {err:?}");
            }
        });
        form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
        // Forms live as long as the page.
        listener.forget();
        wired += 1;
    }
    Ok(wired)
}

fn on_submit(guard: &Guard, event: &Event) -> Result<(), wasm_bindgen::JsValue> {
    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let inputs = required_inputs(&form)?;
    let values: Vec<(String, String)> = inputs
        .iter()
        .map(|input| (input.name(), input.value()))
        .collect();
    let fields: Vec<FieldInput<'_>> = values
        .iter()
        .map(|(name, value)| FieldInput {
            name,
            value,
            required: true,
        })
        .collect();

    if !guard.check(&fields).is_empty() {
        event.prevent_default();
    }

    for (input, field) in inputs.iter().zip(&fields) {
        let color = field.is_blank_required().then_some(INVALID_BORDER_COLOR);
        set_style(input, "border-color", color)?;
    }
    Ok(())
}

fn required_inputs(form: &HtmlFormElement) -> Result<Vec<HtmlInputElement>, WebError> {
    let nodes = form.query_selector_all("input[required]")?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect())
}
