use gloo_console::log;

const TITLE_STYLE: &str = "font-size: 24px; font-weight: bold; color: #d4af7a;";
const LINE_STYLE: &str = "font-size: 14px; color: #8b6f47;";

/// Developer banner printed to the browser console at startup.
pub fn print_console_banner() {
    log!("%cRJL Group Website", TITLE_STYLE);
    log!("%cBuilt with Rust, Yew and WebAssembly", LINE_STYLE);
    log!("%cDesign Style: Bright Glassmorphism", LINE_STYLE);
    log!("%cFonts: Poppins & Inter", LINE_STYLE);
}
