//! Item Detail Column
//!
//! Side column for editing one item: status selector, due date, and note.
//! Saves all three fields as a single merge-update.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::{Item, ItemPatch, ItemStatus};
use crate::roadmap;
use crate::store::{self, use_app_store, AppStateStoreFields};

/// Status options for the selector
const STATUS_OPTIONS: &[ItemStatus] = &[
    ItemStatus::NotStarted,
    ItemStatus::InProgress,
    ItemStatus::Done,
];

/// Detail column for the selected item (hidden when nothing is selected)
#[component]
pub fn ItemDetail() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Form state, local until saved
    let (status_value, set_status_value) =
        signal(ItemStatus::NotStarted.as_str().to_string());
    let (due_value, set_due_value) = signal(String::new());
    let (note_value, set_note_value) = signal(String::new());

    let selected = move || -> Option<Item> {
        let item_id = ctx.selected_item.get()?;
        let state = store.roadmap().get();
        state
            .as_ref()
            .and_then(|doc| roadmap::find_item(doc, &item_id).cloned())
    };

    // Track which item the form was filled from, so edits survive reloads
    let (last_target_id, set_last_target_id) = signal::<Option<String>>(None);

    // Reset the form only when the selected item changes
    Effect::new(move |_| {
        let item_id = ctx.selected_item.get();
        if item_id != last_target_id.get() {
            set_last_target_id.set(item_id);
            if let Some(item) = selected() {
                set_status_value.set(item.status.clone());
                set_due_value.set(item.due_date.clone());
                set_note_value.set(item.note.clone());
            }
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(item_id) = ctx.selected_item.get() else {
            return;
        };
        let patch = ItemPatch {
            status: Some(status_value.get()),
            due_date: Some(due_value.get()),
            note: Some(note_value.get()),
            ..Default::default()
        };
        store::store_apply_item_patch(&store, &item_id, &patch);
        web_sys::console::log_1(&format!("[DETAIL] Saved item {item_id}").into());
    };

    view! {
        {move || {
            selected()
                .map(|item| {
                    let description = item.description.clone();
                    let link = item.link.clone();
                    view! {
                        <aside class="detail">
                            <button
                                type="button"
                                class="btn btn--ghost"
                                on:click=move |_| ctx.select_item(None)
                            >
                                "Close"
                            </button>

                            <h2 class="detail__title">{item.title.clone()}</h2>

                            {(!description.is_empty())
                                .then(|| view! { <p class="detail__description">{description.clone()}</p> })}

                            {link
                                .map(|link| view! {
                                    <p class="detail__link">
                                        "Resource: "
                                        <a href=link.clone() target="_blank" rel="noreferrer">
                                            {link.clone()}
                                        </a>
                                    </p>
                                })}

                            <form class="detail__form" on:submit=save>
                                <div class="form-row">
                                    <label for="status">"Status"</label>
                                    <select
                                        id="status"
                                        prop:value=move || status_value.get()
                                        on:change=move |ev| {
                                            let target = ev.target().unwrap();
                                            let select = target
                                                .dyn_ref::<web_sys::HtmlSelectElement>()
                                                .unwrap();
                                            set_status_value.set(select.value());
                                        }
                                    >
                                        {STATUS_OPTIONS
                                            .iter()
                                            .map(|status| {
                                                view! {
                                                    <option value=status.as_str()>{status.label()}</option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>

                                <div class="form-row">
                                    <label for="dueDate">"Target completion date"</label>
                                    <input
                                        id="dueDate"
                                        type="date"
                                        prop:value=move || due_value.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target
                                                .dyn_ref::<web_sys::HtmlInputElement>()
                                                .unwrap();
                                            set_due_value.set(input.value());
                                        }
                                    />
                                </div>

                                <div class="form-row">
                                    <label for="note">"Note"</label>
                                    <textarea
                                        id="note"
                                        rows="6"
                                        placeholder="Your thoughts, summaries, useful commands..."
                                        prop:value=move || note_value.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let textarea = target
                                                .dyn_ref::<web_sys::HtmlTextAreaElement>()
                                                .unwrap();
                                            set_note_value.set(textarea.value());
                                        }
                                    ></textarea>
                                </div>

                                <div class="form-actions">
                                    <button class="btn" type="submit">
                                        "Save changes"
                                    </button>
                                </div>
                            </form>
                        </aside>
                    }
                })
        }}
    }
}
