/// Root path every backend request is issued against: the page's own
/// origin plus `/api`. Never cross-origin.
pub fn api_base() -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    api_base_for(&origin)
}

pub fn api_base_for(origin: &str) -> String {
    format!("{}/api", origin.trim_end_matches('/'))
}
