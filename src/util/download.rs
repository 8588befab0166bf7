//! Client-side file download via a temporary object URL and anchor click.

#[cfg(feature = "csr")]
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Offer `bytes` to the user as a file download named `filename`.
///
/// Failures are swallowed: a download that cannot start degrades to nothing,
/// and the caller has already toasted the outcome of the export request.
pub fn save_blob(bytes: &[u8], filename: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::new();
        let buffer: wasm_bindgen::JsValue = js_sys::Uint8Array::from(bytes).into();
        parts.push(&buffer);

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(XLSX_MIME);
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(anchor) = document
            .create_element("a")
            .map(wasm_bindgen::JsValue::from)
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>())
        {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                anchor.remove();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, filename);
    }
}
