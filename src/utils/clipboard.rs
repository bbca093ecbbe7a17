//! Clipboard utilities for copying text
//!
//! Uses the async Web Clipboard API when the browser exposes it and falls
//! back to selecting a hidden textarea and running `execCommand("copy")`
//! otherwise (insecure contexts, older browsers).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlTextAreaElement, Window};

use crate::clipboard::ClipboardError;

/// Keeps the fallback textarea out of view and out of layout
const HIDDEN_TEXTAREA_STYLE: &str =
    "position:absolute;left:-9999px;top:0;border:0;padding:0;margin:0;font-size:12pt;";

/// Copy text to the system clipboard
///
/// # Returns
/// * `Ok(())` if the text was written
/// * `Err(ClipboardError)` if neither the async API nor the fallback worked
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;

    if !has_async_clipboard(&window) {
        log::debug!("Async clipboard API unavailable, using execCommand fallback");
        return copy_with_exec_command(&window, text);
    }

    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(ClipboardError::from)
}

/// `navigator.clipboard` is undefined outside secure contexts
fn has_async_clipboard(window: &Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

fn copy_with_exec_command(window: &Window, text: &str) -> Result<(), ClipboardError> {
    let document = window.document().ok_or(ClipboardError::NoDocument)?;
    let body = document.body().ok_or(ClipboardError::NoDocument)?;

    let textarea = document
        .create_element("textarea")
        .map_err(ClipboardError::dom)?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| ClipboardError::Dom("created element is not a textarea".to_string()))?;
    textarea.set_value(text);
    textarea
        .set_attribute("readonly", "")
        .map_err(ClipboardError::dom)?;
    textarea
        .set_attribute("style", HIDDEN_TEXTAREA_STYLE)
        .map_err(ClipboardError::dom)?;

    body.append_child(&textarea).map_err(ClipboardError::dom)?;
    textarea.select();

    let result = match document.dyn_ref::<HtmlDocument>() {
        Some(html_document) => html_document.exec_command("copy"),
        None => Err(JsValue::from_str("document is not an HTML document")),
    };
    textarea.remove();

    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(ClipboardError::CommandFailed),
        Err(e) => Err(ClipboardError::from(e)),
    }
}
