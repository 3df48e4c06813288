//! Document upload card with drag-drop and file-picker entry points.

use leptos::prelude::*;

use crate::state::uploads::UploadState;

/// Upload card accepting one document at a time via drop or file selection.
///
/// Reports each successful upload upward through `on_uploaded` with the
/// file's original name; the page shell owns the resulting list. A failed
/// upload raises a blocking notification and is otherwise dropped — no
/// retry, no queue.
#[component]
pub fn UploadCard(on_uploaded: Callback<String>) -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());

    #[cfg(feature = "csr")]
    let accept_file = move |file: web_sys::File| {
        let mut claimed = false;
        upload.update(|state| claimed = state.begin());
        if !claimed {
            return;
        }

        let name = file.name();
        leptos::task::spawn_local(async move {
            match crate::net::api::upload(&file).await {
                Ok(()) => on_uploaded.run(name),
                Err(err) => {
                    log::warn!("upload failed: {err}");
                    crate::util::notify::alert("Upload failed. Please try again.");
                }
            }
            upload.update(|state| state.settle());
        });
    };

    let on_drag_enter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|state| state.set_drag_active(true));
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        // Required so the browser lets the drop land here.
        ev.prevent_default();
        upload.update(|state| state.set_drag_active(true));
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|state| state.set_drag_active(false));
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|state| state.set_drag_active(false));

        #[cfg(feature = "csr")]
        {
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                accept_file(file);
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let input = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
            let Some(input) = input else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file(file);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    view! {
        <div
            class="upload-card card"
            class=("upload-card--active", move || upload.get().drag_active())
        >
            <div class="upload-card__header">
                <h2 class="upload-card__title">"Upload Documents"</h2>
                <p class="upload-card__hint">"Drag & drop or click to upload"</p>
            </div>
            <div
                class="upload-card__zone"
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input class="upload-card__input" type="file" on:change=on_change/>
                <span class="upload-card__glyph" aria-hidden="true">"↑"</span>
                <p class="upload-card__status">
                    {move || {
                        if upload.get().is_uploading() {
                            "Uploading..."
                        } else {
                            "Support for PDF, DOCX, CSV"
                        }
                    }}
                </p>
            </div>
        </div>
    }
}
