//! Async wrappers around the system clipboard. Only usable in a browser
//! context; anywhere else the operations fail with an environment error.

use crate::models::error::AppError;
use wasm_bindgen_futures::JsFuture;

fn clipboard() -> Result<web_sys::Clipboard, AppError> {
    let window = web_sys::window().ok_or_else(|| {
        AppError::Environment("Clipboard is only available in a browser context".to_string())
    })?;
    Ok(window.navigator().clipboard())
}

/// Writes plain text to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), AppError> {
    let clipboard = clipboard()?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|_| AppError::Environment("Clipboard write was rejected".to_string()))?;
    Ok(())
}

/// Reads plain text from the system clipboard.
pub async fn read_text() -> Result<String, AppError> {
    let clipboard = clipboard()?;
    let value = JsFuture::from(clipboard.read_text())
        .await
        .map_err(|_| AppError::Environment("Clipboard read was rejected".to_string()))?;
    value
        .as_string()
        .ok_or_else(|| AppError::Environment("Clipboard did not return text".to_string()))
}
