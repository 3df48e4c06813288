//! Browser file-save helper.
//!
//! Builds a transient anchor carrying the `download` attribute, clicks it,
//! and removes it again; the browser performs the retrieval of the linked
//! resource. Requires a browser environment.

/// Offer `url` to the user as a file download named `filename`.
///
/// Returns `false` if the DOM was not available or the anchor could not be
/// constructed; no save action is triggered in that case.
#[cfg(feature = "csr")]
pub fn save_file(url: &str, filename: &str) -> bool {
    use wasm_bindgen::JsCast as _;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(element) = document.create_element("a") else {
        return false;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return false;
    };

    anchor.set_href(url);
    anchor.set_download(filename);
    if body.append_child(&anchor).is_err() {
        return false;
    }
    anchor.click();
    anchor.remove();
    true
}
