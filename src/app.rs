//! Roadmap Tracker App
//!
//! Main application component: header with overall progress, import/export
//! toolbar, item grid, and the item detail column.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ImportPanel, ItemDetail, ProgressBar, RoadmapGrid};
use crate::context::AppContext;
use crate::roadmap;
use crate::storage::{self, LocalStore, RoadmapStore};
use crate::store::{AppState, AppStateStoreFields};

const FORMAT_EXAMPLE: &str = r#"{
  "title": "React Roadmap",
  "description": "Short description",
  "items": [
    {
      "id": "jsx",
      "title": "JSX",
      "description": "JSX basics",
      "link": "https://..."
    }
  ]
}"#;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (selected_item, set_selected_item) = signal::<Option<String>>(None);
    provide_context(AppContext::new((selected_item, set_selected_item)));

    // Restore the previously saved roadmap, if any
    let persistence = LocalStore;
    if let Some(doc) = storage::load_document(&persistence) {
        web_sys::console::log_1(
            &format!("[APP] Restored saved roadmap with {} items", doc.items.len()).into(),
        );
        store.roadmap().set(Some(doc));
    }

    // Persist after every roadmap change; clearing the roadmap clears storage
    Effect::new(move |_| {
        let state = store.roadmap().get();
        match state.as_ref() {
            Some(doc) => storage::save_document(&persistence, doc),
            None => persistence.clear(),
        }
    });

    let progress = Memo::new(move |_| {
        let state = store.roadmap().get();
        roadmap::compute_progress(state.as_ref())
    });

    view! {
        <div class="app">
            <header class="header">
                <div>
                    <h1 class="header__title">"Roadmap Tracker"</h1>
                    <p class="header__subtitle">
                        "Import a roadmap (JSON), track your progress, add notes and due dates."
                    </p>
                </div>
                <div class="header__progress">
                    <span class="header__progress-label">
                        {move || format!("Overall progress: {}%", progress.get())}
                    </span>
                    <ProgressBar value=progress />
                </div>
            </header>

            <main class="main">
                <ImportPanel />
                <RoadmapGrid />
            </main>

            <ItemDetail />

            <footer class="footer">
                <p>"Minimal expected input format:"</p>
                <pre class="footer__json-example">{FORMAT_EXAMPLE}</pre>
            </footer>
        </div>
    }
}
