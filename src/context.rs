//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item currently open in the detail column - read
    pub selected_item: ReadSignal<Option<String>>,
    /// Item currently open in the detail column - write
    set_selected_item: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        selected_item: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            selected_item: selected_item.0,
            set_selected_item: selected_item.1,
        }
    }

    /// Open an item in the detail column (None closes it)
    pub fn select_item(&self, item_id: Option<String>) {
        self.set_selected_item.set(item_id);
    }
}
