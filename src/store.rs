//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Document, ItemPatch};
use crate::roadmap;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently loaded roadmap, if any
    pub roadmap: Option<Document>,
    /// Last import failure message, empty after a successful import
    pub import_error: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the roadmap after a successful import and clear any stale error
pub fn store_set_roadmap(store: &AppStore, doc: Document) {
    store.roadmap().set(Some(doc));
    store.import_error().set(String::new());
}

/// Record a failed import, leaving the current roadmap untouched
pub fn store_set_import_error(store: &AppStore, message: String) {
    store.import_error().set(message);
}

/// Drop the current roadmap; the persist effect clears storage
pub fn store_clear_roadmap(store: &AppStore) {
    store.roadmap().set(None);
    store.import_error().set(String::new());
}

/// Merge-update one item by id; a no-op without a loaded roadmap
pub fn store_apply_item_patch(store: &AppStore, item_id: &str, patch: &ItemPatch) {
    let roadmap = store.roadmap();
    let mut state = roadmap.write();
    if let Some(doc) = state.take() {
        *state = Some(roadmap::update_item(&doc, item_id, patch));
    }
}
