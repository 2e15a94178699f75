//! Clipboard utilities for copying text
//!
//! Tries the Web Clipboard API first, then falls back to the legacy
//! hidden-textarea `execCommand("copy")` technique. The caller always gets
//! a plain boolean; failures are logged, never raised.

use wasm_bindgen::{JsCast, JsValue};

/// Copy text to the system clipboard.
///
/// Returns `true` if either the native API or the fallback reported
/// success. Never panics and never returns an error.
pub async fn copy(text: &str) -> bool {
    match native_copy(text).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("Clipboard write failed, trying fallback: {:?}", e);
            fallback_copy(text)
        }
    }
}

async fn native_copy(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();
    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}

/// Legacy copy path: inject an off-screen readonly textarea, select its
/// contents, and run the browser copy command. The textarea is removed on
/// every path before returning.
fn fallback_copy(text: &str) -> bool {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return false,
    };
    let body = match document.body() {
        Some(b) => b,
        None => return false,
    };

    let textarea: web_sys::HtmlTextAreaElement = match document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(t) => t,
        None => return false,
    };

    textarea.set_value(text);
    textarea.set_read_only(true);
    textarea.set_attribute("aria-hidden", "true").ok();
    textarea
        .set_attribute("style", "position:fixed;left:-9999px;top:-9999px;opacity:0")
        .ok();

    if body.append_child(&textarea).is_err() {
        return false;
    }

    textarea.select();
    textarea.set_selection_range(0, 99_999).ok();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .map(|d| d.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);

    body.remove_child(&textarea).ok();

    copied
}
