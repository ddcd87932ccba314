//! Persistence Gateway
//!
//! Saves the current roadmap to a fixed-key text store (window.localStorage
//! in the browser). The store is injected so tests run against an in-memory
//! fake, and every failure on the load path downgrades to "no saved roadmap"
//! rather than surfacing to the user.

use std::cell::RefCell;

use crate::models::Document;

/// localStorage key for the persisted roadmap
pub const STORAGE_KEY: &str = "roadmap-tracker-data";

/// Fixed-key text store the roadmap persists into
pub trait RoadmapStore {
    fn load(&self) -> Option<String>;
    fn save(&self, text: &str);
    fn clear(&self);
}

/// Store backed by window.localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl RoadmapStore for LocalStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, text: &str) {
        if let Some(storage) = local_storage() {
            // a full or unavailable store loses this save, by design
            let _ = storage.set_item(STORAGE_KEY, text);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemoryStore(RefCell<Option<String>>);

impl RoadmapStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, text: &str) {
        *self.0.borrow_mut() = Some(text.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Read the saved roadmap, treating any failure as "nothing saved"
///
/// Saved bytes are a prior normalization's output, so a plain serde parse is
/// enough; corrupt or unreadable state is discarded, never surfaced.
pub fn load_document(store: &dyn RoadmapStore) -> Option<Document> {
    let text = store.load()?;
    match serde_json::from_str(&text) {
        Ok(doc) => Some(doc),
        Err(err) => {
            log(&format!("[STORE] Discarding unreadable saved roadmap: {err}"));
            None
        }
    }
}

/// Serialize and save the roadmap under the fixed key
pub fn save_document(store: &dyn RoadmapStore, doc: &Document) {
    if let Ok(text) = serde_json::to_string(doc) {
        store.save(&text);
    }
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn sample_doc() -> Document {
        Document {
            title: "React Roadmap".to_string(),
            description: String::new(),
            items: vec![Item::new("jsx", "JSX")],
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::default();
        let doc = sample_doc();
        save_document(&store, &doc);
        assert_eq!(load_document(&store), Some(doc));
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryStore::default();
        assert_eq!(load_document(&store), None);
    }

    #[test]
    fn test_corrupt_state_is_treated_as_absent() {
        let store = MemoryStore::default();
        store.save("{ definitely not json");
        assert_eq!(load_document(&store), None);

        // wrong shape is also downgraded, not surfaced
        store.save(r#"{"unexpected":"shape"}"#);
        assert_eq!(load_document(&store), None);
    }

    #[test]
    fn test_clear_removes_saved_state() {
        let store = MemoryStore::default();
        save_document(&store, &sample_doc());
        store.clear();
        assert_eq!(load_document(&store), None);
    }
}
