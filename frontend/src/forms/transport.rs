use gloo_net::http::Request;
use serde::Serialize;

/// Sends a JSON body and reports the response status.
///
/// `Err` carries a human-readable description of a transport-level failure
/// (request could not be built or sent, or no response arrived). Any
/// response that did arrive, whatever its status, is `Ok`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, String>;
}

/// `fetch`-backed transport used in the browser.
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, String> {
        // `json` also sets `Content-Type: application/json`
        let request = Request::post(url).json(body).map_err(|e| e.to_string())?;
        let response = request.send().await.map_err(|e| e.to_string())?;
        Ok(response.status())
    }
}
