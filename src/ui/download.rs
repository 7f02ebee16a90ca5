//! Client-side file downloads (CSV and JSON exports)

/// Offer `contents` as a file download named `filename`
pub fn download_text(filename: &str, mime: &str, contents: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Err(err) = trigger_download(filename, mime, contents) {
            leptos::logging::warn!("download of {} failed: {:?}", filename, err);
        }
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (filename, mime, contents);
    }
}

#[cfg(not(feature = "ssr"))]
fn trigger_download(
    filename: &str,
    mime: &str,
    contents: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    use leptos::web_sys;
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
