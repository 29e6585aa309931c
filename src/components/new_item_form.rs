//! New Item Form Component
//!
//! Form for adding items to the list.

use leptos::prelude::*;
use todo_store::Intent;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

/// Text input plus "Add" button; Enter submits
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Intent::Submit(ctx.view.input().get()));
    };

    view! {
        <form id="todo-form" class="new-item-form" on:submit=create_item>
            <input
                id="todo-input"
                type="text"
                placeholder="Add a new task..."
                autocomplete="off"
                prop:value=move || ctx.view.input().get()
                on:input=move |ev| ctx.view.input().set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
