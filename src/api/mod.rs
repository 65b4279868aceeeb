//! Remote Endpoint Wrappers
//!
//! Browser `fetch` bindings for the catalog endpoint.

mod products;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{js_message, FetchError};

// Re-export all public items
pub use products::*;

/// GET `url` and return the body text of a 2xx response
async fn get_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Request(js_message(&e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| FetchError::Request(js_message(&e)))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(js_message(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| FetchError::Network(js_message(&e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().map_err(|e| FetchError::Body(js_message(&e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Body(js_message(&e)))?;
    text.as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))
}
