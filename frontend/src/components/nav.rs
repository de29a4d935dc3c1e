use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const SECTIONS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#classes", "Classes"),
    ("#gallery", "Gallery"),
    ("#register", "Register"),
    ("#contact", "Contact"),
];

const SCROLLED_PAST: f64 = 50.0;

pub fn navbar_shadow(scroll_top: f64) -> &'static str {
    if scroll_top > SCROLLED_PAST {
        "0 4px 30px rgba(0, 0, 0, 0.1)"
    } else {
        "0 4px 20px rgba(0, 0, 0, 0.05)"
    }
}

/// Smoothly scrolls the element matching an in-page `#anchor` into view.
pub fn scroll_to_anchor(href: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    // a bare "#" is not a valid selector and lands in the Err arm
    if let Ok(Some(target)) = document.query_selector(href) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn on_anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(href);
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let shadow = use_state_eq(|| navbar_shadow(0.0));

    {
        let shadow = shadow.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(window) = web_sys::window() {
                shadow.set(navbar_shadow(window.scroll_y().unwrap_or(0.0)));
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let link = |href: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let scroll = on_anchor_click(href);
        let onclick = Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            scroll.emit(e);
        });
        html! {
            <li><a href={href} class="nav-link" {onclick}>{label}</a></li>
        }
    };

    html! {
        <nav class="navbar-glass" style={format!("box-shadow: {};", *shadow)}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={on_anchor_click("#home")}>
                    {"RJL Group"}
                </a>
                <button
                    id="navToggle"
                    class={classes!("nav-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for SECTIONS.iter().map(|&(href, label)| link(href, label)) }
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_deepens_past_fifty_pixels() {
        assert_eq!(navbar_shadow(0.0), "0 4px 20px rgba(0, 0, 0, 0.05)");
        assert_eq!(navbar_shadow(50.0), "0 4px 20px rgba(0, 0, 0, 0.05)");
        assert_eq!(navbar_shadow(50.5), "0 4px 30px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn every_section_is_an_in_page_anchor() {
        assert!(SECTIONS.iter().all(|(href, _)| href.starts_with('#') && href.len() > 1));
    }
}
