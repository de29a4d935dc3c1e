use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const GALLERY_IMAGES: &[(&str, &str)] = &[
    ("/rjl-assets/images/gallery-1.jpg", "Freshly baked sourdough"),
    ("/rjl-assets/images/gallery-2.jpg", "Pastry class in session"),
    ("/rjl-assets/images/gallery-3.jpg", "Latte art close-up"),
    ("/rjl-assets/images/gallery-4.jpg", "Our kitchen studio"),
    ("/rjl-assets/images/gallery-5.jpg", "Seasonal tarts"),
    ("/rjl-assets/images/gallery-6.jpg", "Group workshop"),
];

/// Length of the lightbox fade-out before it is removed.
const LIGHTBOX_FADE_MS: u32 = 300;

pub fn background_style(url: &str) -> String {
    format!("background-image: url('{}');", url)
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: AttrValue,
    pub on_closed: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let closing = use_state(|| false);
    // dropped with the component, cancelling a fade that has not finished
    let fade: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let close = {
        let closing = closing.clone();
        let on_closed = props.on_closed.clone();
        Callback::from(move |_: MouseEvent| {
            if *closing {
                return;
            }
            closing.set(true);
            let on_closed = on_closed.clone();
            fade.borrow_mut()
                .replace(Timeout::new(LIGHTBOX_FADE_MS, move || on_closed.emit(())));
        })
    };

    let animation = if *closing { "fadeOut 0.3s ease" } else { "fadeIn 0.3s ease" };

    html! {
        <div class="lightbox-overlay" style={format!("animation: {};", animation)} onclick={close}>
            <img class="lightbox-image" src={props.src.clone()} alt="" />
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let open_image = use_state(|| None::<AttrValue>);

    let on_closed = {
        let open_image = open_image.clone();
        Callback::from(move |_| open_image.set(None))
    };

    let item = |src: &'static str, caption: &'static str| {
        let open_image = open_image.clone();
        let onclick = Callback::from(move |_: MouseEvent| open_image.set(Some(AttrValue::from(src))));
        html! {
            <div class="gallery-item slide-up" style={background_style(src)} title={caption} {onclick}></div>
        }
    };

    html! {
        <>
            <style>
                {r#"
                    .lightbox-overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 10000;
                        cursor: pointer;
                    }
                    .lightbox-image {
                        max-width: 90%;
                        max-height: 90%;
                        border-radius: 20px;
                        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
                    }
                    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
                "#}
            </style>
            <div class="gallery-grid">
                { for GALLERY_IMAGES.iter().map(|&(src, caption)| item(src, caption)) }
            </div>
            if let Some(src) = (*open_image).clone() {
                <Lightbox {src} {on_closed} />
            }
        </>
    }
}
