use log::{info, Level};
use yew::prelude::*;

mod config;
mod forms {
    pub mod contact;
    pub mod hook;
    pub mod message;
    pub mod registration;
    pub mod state;
    pub mod submission;
    pub mod transport;
}
mod components {
    pub mod banner;
    pub mod effects;
    pub mod gallery;
    pub mod hover;
    pub mod input_hint;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use components::effects::{use_page_fade_in, use_scroll_effects};
use pages::home::Home;

#[function_component]
fn App() -> Html {
    // computed once for the lifetime of the page
    let api_base = use_memo(|_| AttrValue::from(config::api_base()), ());

    use_page_fade_in();
    use_scroll_effects();

    html! {
        <Home api_base={(*api_base).clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    components::banner::print_console_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
