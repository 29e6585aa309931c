//! Todo List App
//!
//! Builds the controller once, provides it via context and lays out the
//! form, settings and list.

use leptos::prelude::*;
use log::warn;
use reactive_stores::Store;

use todo_store::{KeyValueStorage, ListController, MemoryStorage, StoreConfig, TodoStore};

use crate::browser::{BrowserClock, BrowserDialogs, BrowserStorage};
use crate::components::{NewItemForm, SettingsPanel, TodoList};
use crate::context::AppContext;
use crate::store::ViewState;

/// Open `localStorage`, or keep the list in memory for this session
fn open_storage() -> Box<dyn KeyValueStorage> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            warn!("{}; todos will not survive a reload", err);
            Box::new(MemoryStorage::new())
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::open(open_storage(), StoreConfig::default()).with_clock(BrowserClock);
    let controller = ListController::new(store, BrowserDialogs);

    let ctx = AppContext::new(controller, Store::new(ViewState::default()));
    ctx.refresh();
    provide_context(ctx);

    view! {
        <div class="container">
            <h1>"Todo List"</h1>
            <NewItemForm />
            <SettingsPanel />
            <TodoList />
        </div>
    }
}
