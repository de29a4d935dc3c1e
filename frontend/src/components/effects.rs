use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

const REVEAL_SELECTOR: &str = ".slide-up";
const LAZY_SELECTOR: &str = ".gallery-item, .menu-image, .product-image";

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn intersecting(entries: &Array) -> Vec<HtmlElement> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .filter_map(|entry| entry.target().dyn_into::<HtmlElement>().ok())
        .collect()
}

fn observer(callback: &ObserverCallback, root_margin: &str, threshold: Option<f64>) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    if let Some(threshold) = threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
        .ok()
}

fn observe_all(observer: &IntersectionObserver, selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
}

/// Slides `.slide-up` sections in as they enter the viewport, and fades in
/// image tiles the first time they come near it.
#[hook]
pub fn use_scroll_effects() {
    use_effect_with_deps(
        move |_| {
            let reveal: ObserverCallback = Closure::new(|entries: Array, _: IntersectionObserver| {
                for element in intersecting(&entries) {
                    set_style(&element, "opacity", "1");
                    set_style(&element, "animation", "slideUp 0.6s ease forwards");
                }
            });

            let lazy: ObserverCallback = Closure::new(|entries: Array, observer: IntersectionObserver| {
                for element in intersecting(&entries) {
                    set_style(&element, "opacity", "0");
                    observer.unobserve(&element);
                    Timeout::new(100, move || {
                        set_style(&element, "transition", "opacity 0.5s ease");
                        set_style(&element, "opacity", "1");
                    })
                    .forget();
                }
            });

            let reveal_observer = observer(&reveal, "0px 0px -100px 0px", Some(0.1));
            let lazy_observer = observer(&lazy, "50px", None);
            if let Some(observer) = &reveal_observer {
                observe_all(observer, REVEAL_SELECTOR);
            }
            if let Some(observer) = &lazy_observer {
                observe_all(observer, LAZY_SELECTOR);
            }

            move || {
                for observer in [reveal_observer, lazy_observer].into_iter().flatten() {
                    observer.disconnect();
                }
                drop(reveal);
                drop(lazy);
            }
        },
        (),
    );
}

/// Fades the whole page in shortly after it mounts.
#[hook]
pub fn use_page_fade_in() {
    use_effect_with_deps(
        move |_| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let Some(body) = &body {
                set_style(body, "opacity", "0");
            }
            let timeout = body.map(|body| {
                Timeout::new(100, move || {
                    set_style(&body, "transition", "opacity 0.5s ease");
                    set_style(&body, "opacity", "1");
                })
            });
            move || drop(timeout)
        },
        (),
    );
}
