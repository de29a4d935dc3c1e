use web_sys::HtmlElement;
use yew::prelude::*;

fn set_transform(e: &MouseEvent, transform: &str) {
    if let Some(element) = e.target_dyn_into::<HtmlElement>() {
        let _ = element.style().set_property("transform", transform);
    }
}

/// Lifts `.btn-glass` / `.btn-small` buttons slightly while hovered.
pub fn on_hover_lift() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| set_transform(&e, "translateY(-2px)"))
}

pub fn on_hover_drop() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| set_transform(&e, "translateY(0)"))
}
