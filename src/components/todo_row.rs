//! Todo Row Component
//!
//! Individual item in the list.

use leptos::prelude::*;
use todo_store::{Intent, RowView};

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

/// A single item row. Text and timestamp are fixed for the row's lifetime;
/// the completed and removing flags are read live from the view store.
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    // (completed, removing)
    let flags = move || {
        ctx.view.rows().with(|rows| {
            rows.iter()
                .find(|r| r.id == id)
                .map(|r| (r.completed, r.removing))
                .unwrap_or_default()
        })
    };
    let checked = move || {
        let (completed, removing) = flags();
        completed || removing
    };

    let on_change = move |ev: web_sys::Event| {
        ctx.dispatch(Intent::CheckboxChanged(id));
        // A declined or locked change leaves the store untouched, so put the box back
        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(untrack(checked));
    };

    view! {
        <li class="todo-item" class:removing=move || flags().1 data-id=id.to_string()>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=on_change
            />

            <div class="todo-content" class:completed=move || flags().0>
                // Stored text is already escaped, so it renders literally
                <span class="todo-text" inner_html=row.text_html></span>
                <span class="timestamp">{row.timestamp}</span>
            </div>

            <button class="edit-btn" on:click=move |_| ctx.dispatch(Intent::EditClicked(id))>
                "Edit"
            </button>
            <button class="delete-btn" on:click=move |_| ctx.dispatch(Intent::DeleteClicked(id))>
                "Delete"
            </button>
        </li>
    }
}
