//! Todo List Component
//!
//! Renders every row from the view store, newest first.

use leptos::prelude::*;
use todo_store::RowView;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

/// The list container. Rows are keyed by id and text, so a row that only
/// changes its flags keeps its DOM node and its fade-out transition runs.
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || ctx.view.rows().get()
                key=|row: &RowView| (row.id, row.text_html.clone())
                children=move |row: RowView| view! { <TodoRow row=row /> }
            />
        </ul>
        <p class="item-count">{move || format!("{} tasks", ctx.view.rows().read().len())}</p>
    }
}
