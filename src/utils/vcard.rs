//! Founder contact-card downloads.
//!
//! vCards live as static assets under `vcards/`. The bytes are fetched,
//! wrapped in a Blob, and handed to the browser through a temporary
//! object-URL anchor click.

use anyhow::{anyhow, Context, Result};
use wasm_bindgen::{JsCast, JsValue};

/// Relative path of a founder's contact file.
pub fn vcard_path(name: &str) -> String {
    format!("vcards/{name}.vcf")
}

/// Fetch a founder's vCard and trigger a browser download.
pub async fn download_vcard(name: &str) -> Result<()> {
    let path = vcard_path(name);
    let response = gloo_net::http::Request::get(&path)
        .send()
        .await
        .with_context(|| format!("request for {path} failed"))?;

    if !response.ok() {
        return Err(anyhow!("vCard not found: {path} (HTTP {})", response.status()));
    }

    let bytes = response
        .binary()
        .await
        .with_context(|| format!("could not read body of {path}"))?;

    trigger_download(&bytes, &format!("{name}.vcf"))
        .map_err(|e| anyhow!("browser download failed: {:?}", e))
}

fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/vcard");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("not an anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_vcards_name_vcf() {
        assert_eq!(vcard_path("jane-doe"), "vcards/jane-doe.vcf");
    }
}
