//! Application Context
//!
//! The single list controller plus the view store, provided via Leptos
//! Context API. Components send intents here; effects are applied here.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use todo_store::{Effect, Intent, KeyValueStorage, ListController};

use crate::browser::BrowserDialogs;
use crate::store::{ViewStore, ViewStateStoreFields};

pub type Controller = ListController<Box<dyn KeyValueStorage>, BrowserDialogs>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list controller; owned here for the page lifetime
    controller: StoredValue<Controller, LocalStorage>,
    /// Render snapshot read by components
    pub view: ViewStore,
}

impl AppContext {
    pub fn new(controller: Controller, view: ViewStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            view,
        }
    }

    /// Handle a user intent and apply the resulting effect
    pub fn dispatch(&self, intent: Intent) {
        debug!("intent {:?}", intent);
        let effect = self
            .controller
            .try_update_value(|controller| controller.handle(intent))
            .unwrap_or(Effect::Nothing);
        self.apply(effect);
    }

    /// Copy controller state into the view store
    pub fn refresh(&self) {
        let (rows, disable_confirmation) = self.controller.with_value(|controller| {
            (
                controller.rows(&Local),
                controller.store().settings().disable_confirmation,
            )
        });
        self.view.rows().set(rows);
        self.view.disable_confirmation().set(disable_confirmation);
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::Nothing => {}
            // The row resets a reverted checkbox from the refreshed flags
            Effect::Render | Effect::Revert => self.refresh(),
            Effect::ClearInput => {
                self.view.input().set(String::new());
                self.refresh();
            }
            Effect::ScheduleRemoval { id, delay } => {
                self.refresh();
                let ctx = *self;
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                spawn_local(async move {
                    TimeoutFuture::new(millis).await;
                    let effect = ctx
                        .controller
                        .try_update_value(|controller| controller.finish_removal(id))
                        .unwrap_or(Effect::Render);
                    ctx.apply(effect);
                });
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
