//! Clipboard Access
//!
//! Wrapper over the async Clipboard API.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Write plain text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e: JsValue| {
            let reason = e.as_string().unwrap_or_else(|| format!("{:?}", e));
            format!("Clipboard write failed: {}", reason)
        })
}
