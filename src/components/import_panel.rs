//! Import Panel Component
//!
//! Toolbar with the JSON file input, export-with-progress download, reset
//! action, and the import error banner.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::roadmap;
use crate::store::{self, use_app_store, AppStateStoreFields};

/// Build a Blob download and click a synthesized anchor for it
fn download_json(text: &str, file_name: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Toolbar for importing, exporting, and resetting the roadmap
#[component]
pub fn ImportPanel() -> impl IntoView {
    let store = use_app_store();

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // allow selecting the same file again later
        input.set_value("");

        let mime = file.type_();
        if !mime.is_empty() && mime != "application/json" {
            store::store_set_import_error(&store, "Expected a JSON roadmap file.".to_string());
            return;
        }

        // Single-shot async read; a newer selection simply starts a new read
        // and the last one to complete wins.
        spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(_) => {
                    store::store_set_import_error(&store, "Failed to read the file.".to_string());
                    return;
                }
            };
            match roadmap::import_from_text(&text) {
                Ok(doc) => {
                    web_sys::console::log_1(
                        &format!("[IMPORT] Loaded roadmap with {} items", doc.items.len()).into(),
                    );
                    store::store_set_roadmap(&store, doc);
                }
                Err(err) => {
                    store::store_set_import_error(
                        &store,
                        format!(
                            "Could not read the file. Check that it is valid JSON with \
                             title, description and items[]. ({})",
                            err.message
                        ),
                    );
                }
            }
        });
    };

    let on_export = move |_| {
        let state = store.roadmap().get();
        let Some(doc) = state.as_ref() else { return };
        let text = roadmap::export_to_text(doc);
        let file_name = roadmap::export_file_name(doc);
        if let Err(err) = download_json(&text, &file_name) {
            web_sys::console::log_1(&format!("[EXPORT] Download failed: {err:?}").into());
        }
    };

    let on_reset = move |_| {
        store::store_clear_roadmap(&store);
    };

    let has_roadmap = move || store.roadmap().get().is_some();
    let import_error = move || store.import_error().get();

    view! {
        <section class="toolbar">
            <div class="file-controls">
                <label class="file-upload">
                    <span>"Import roadmap (JSON)"</span>
                    <input
                        type="file"
                        accept="application/json,.json"
                        on:change=on_file_change
                    />
                </label>

                <button class="btn" on:click=on_export disabled=move || !has_roadmap()>
                    "Export with progress"
                </button>

                <button
                    class="btn btn--ghost"
                    on:click=on_reset
                    disabled=move || !has_roadmap()
                >
                    "Reset"
                </button>
            </div>

            {move || {
                let error = import_error();
                (!error.is_empty()).then(|| view! { <p class="error">{error}</p> })
            }}
        </section>
    }
}
