//! Remote Item API
//!
//! Single GET against the public items endpoint, decoded across the wasm
//! boundary with serde-wasm-bindgen. Failures collapse into two generic
//! user-facing messages; no retry, no timeout, no pagination.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::Item;

const API_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetch failures, normalized to user-facing messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch items from the server. Please try again later.")]
    Network,
    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected,
}

/// Fetch the full item collection from the remote endpoint
pub async fn fetch_items() -> Result<Vec<Item>, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(API_URL, &opts).map_err(|_| FetchError::Unexpected)?;
    let window = web_sys::window().ok_or(FetchError::Unexpected)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| {
            web_sys::console::error_1(&err);
            FetchError::Network
        })?;
    let resp: Response = resp_value.dyn_into().map_err(|_| FetchError::Unexpected)?;

    if !resp.ok() {
        web_sys::console::error_1(
            &format!("[API] GET {} returned status {}", API_URL, resp.status()).into(),
        );
        return Err(FetchError::Network);
    }

    let json_promise = resp.json().map_err(|_| FetchError::Unexpected)?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|_| FetchError::Network)?;

    serde_wasm_bindgen::from_value(json).map_err(|err| {
        web_sys::console::error_1(&format!("[API] decode failed: {}", err).into());
        FetchError::Unexpected
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(
            FetchError::Network.to_string(),
            "Failed to fetch items from the server. Please try again later."
        );
        assert_eq!(
            FetchError::Unexpected.to_string(),
            "An unexpected error occurred. Please try again later."
        );
    }
}
