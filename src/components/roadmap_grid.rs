//! Roadmap Grid Component
//!
//! Title, description, and the card grid for the loaded roadmap.

use leptos::prelude::*;

use crate::components::RoadmapCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Grid of roadmap items, or a hint when nothing is loaded yet
#[component]
pub fn RoadmapGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            match store.roadmap().get() {
                None => view! {
                    <p class="hint">
                        "Load a roadmap JSON file to start tracking your progress."
                    </p>
                }
                .into_any(),
                Some(doc) => {
                    let description = doc.description.clone();
                    view! {
                        <section class="roadmap-info">
                            <h2>{doc.title.clone()}</h2>
                            {(!description.is_empty()).then(|| view! { <p>{description}</p> })}
                        </section>

                        {if doc.items.is_empty() {
                            view! { <p class="hint">"This roadmap has no items yet."</p> }
                                .into_any()
                        } else {
                            view! {
                                <section class="grid">
                                    {doc
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <RoadmapCard item=item /> })
                                        .collect_view()}
                                </section>
                            }
                            .into_any()
                        }}
                    }
                    .into_any()
                }
            }
        }}
    }
}
