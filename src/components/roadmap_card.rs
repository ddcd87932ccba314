//! Roadmap Card Component
//!
//! One item in the grid: title, status badge, short description, due date.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Item;

/// Description preview cut to 120 characters
fn short_description(description: &str) -> String {
    if description.chars().count() > 120 {
        let cut: String = description.chars().take(117).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

/// Card for a single roadmap item; clicking "Open" selects it for editing
#[component]
pub fn RoadmapCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let status = item.display_status();
    let card_class = format!(
        "card card--status-{}",
        status.as_str().replace('_', "-")
    );
    let description = short_description(&item.description);
    let due_date = item.due_date.clone();
    let item_id = item.id.clone();

    view! {
        <article class=card_class>
            <header class="card__header">
                <h3 class="card__title">{item.title.clone()}</h3>
                <span class="card__status-badge">{status.label()}</span>
            </header>

            {(!description.is_empty()).then(|| view! { <p class="card__description">{description.clone()}</p> })}

            <footer class="card__footer">
                {(!due_date.is_empty())
                    .then(|| view! { <span class="card__due-date">{format!("Due: {due_date}")}</span> })}

                <button
                    class="card__link"
                    on:click=move |_| ctx.select_item(Some(item_id.clone()))
                >
                    "Open"
                </button>
            </footer>
        </article>
    }
}
