use web_sys::HtmlElement;
use yew::prelude::*;

use crate::forms::hook::control_value;

const FOCUS_BORDER: &str = "var(--color-soft-gold)";
const FILLED_BORDER: &str = "rgba(76, 175, 80, 0.5)";
const MISSING_BORDER: &str = "rgba(244, 67, 54, 0.5)";

/// Border colour a control gets when it loses focus, if any.
pub fn blur_border(value: &str, required: bool) -> Option<&'static str> {
    if !value.trim().is_empty() {
        Some(FILLED_BORDER)
    } else if required {
        Some(MISSING_BORDER)
    } else {
        None
    }
}

pub fn on_focus_hint() -> Callback<FocusEvent> {
    Callback::from(|e: FocusEvent| {
        if let Some(element) = e.target_dyn_into::<HtmlElement>() {
            let _ = element.style().set_property("border-color", FOCUS_BORDER);
        }
    })
}

pub fn on_blur_hint() -> Callback<FocusEvent> {
    Callback::from(|e: FocusEvent| {
        let Some(element) = e.target_dyn_into::<HtmlElement>() else {
            return;
        };
        let value = control_value(&e).unwrap_or_default();
        if let Some(color) = blur_border(&value, element.has_attribute("required")) {
            let _ = element.style().set_property("border-color", color);
        }
    })
}
