//! List Controller
//!
//! Turns user intents into store commands, applying the confirmation,
//! lock and delayed-removal policies of the list view.
//!
//! Completing an item is a two-step affair: `CheckboxChanged` confirms and
//! locks, the UI waits `removal_delay` while the row fades out, then calls
//! `finish_removal`. While a removal is pending every other checkbox change
//! is reverted, so only one removal is ever in flight.

use std::fmt::Display;
use std::time::Duration;

use chrono::TimeZone;
use log::{debug, warn};

use crate::command::{Command, Outcome};
use crate::display::{rows, RowView};
use crate::model::ItemId;
use crate::sanitize::unescape_html;
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

pub const CONFIRM_COMPLETE_MESSAGE: &str = "Are you sure you want to mark this task as complete?";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this task?";
pub const EDIT_PROMPT_MESSAGE: &str = "Edit your task:";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save todos. Please check your browser settings.";

/// Blocking user dialogs
pub trait Prompter {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;
    /// Ask for text, pre-filled with `default`; `None` when cancelled
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
    /// Show a warning
    fn alert(&self, message: &str);
}

/// A user action, as produced by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The new-item form was submitted with this text
    Submit(String),
    /// A row's checkbox was clicked
    CheckboxChanged(ItemId),
    DeleteClicked(ItemId),
    EditClicked(ItemId),
    /// The "disable confirmation" checkbox changed to this value
    ConfirmationToggled(bool),
}

/// What the view has to do after an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    Nothing,
    /// State changed; re-render
    Render,
    /// An item was added; re-render and clear the input
    ClearInput,
    /// Put the clicked checkbox back to its stored state
    Revert,
    /// Fade the row out, then call `finish_removal(id)` after `delay`
    ScheduleRemoval { id: ItemId, delay: Duration },
}

pub struct ListController<S: KeyValueStorage, P: Prompter> {
    store: TodoStore<S>,
    prompter: P,
    pending_removal: Option<ItemId>,
}

impl<S: KeyValueStorage, P: Prompter> ListController<S, P> {
    pub fn new(store: TodoStore<S>, prompter: P) -> Self {
        Self {
            store,
            prompter,
            pending_removal: None,
        }
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Item whose delayed removal is in flight
    pub fn pending_removal(&self) -> Option<ItemId> {
        self.pending_removal
    }

    /// Rows to render, in display order
    pub fn rows<Tz>(&self, tz: &Tz) -> Vec<RowView>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        rows(self.store.items(), self.pending_removal, tz)
    }

    pub fn handle(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::Submit(text) => {
                if self.apply(Command::Add(text)).changed() {
                    Effect::ClearInput
                } else {
                    Effect::Nothing
                }
            }
            Intent::CheckboxChanged(id) => self.checkbox_changed(id),
            Intent::DeleteClicked(id) => {
                if self.store.get(id).is_none() || !self.confirm(CONFIRM_DELETE_MESSAGE) {
                    return Effect::Nothing;
                }
                self.render_if_changed(Command::Delete(id))
            }
            Intent::EditClicked(id) => {
                let Some(item) = self.store.get(id) else {
                    return Effect::Nothing;
                };
                let current = unescape_html(&item.text);
                match self.prompter.prompt(EDIT_PROMPT_MESSAGE, &current) {
                    Some(text) => self.render_if_changed(Command::Edit(id, text)),
                    None => Effect::Nothing,
                }
            }
            Intent::ConfirmationToggled(disabled) => {
                let mut settings = self.store.settings();
                settings.disable_confirmation = disabled;
                self.render_if_changed(Command::SetSettings(settings))
            }
        }
    }

    /// Complete the item scheduled by `ScheduleRemoval` and release the lock
    pub fn finish_removal(&mut self, id: ItemId) -> Effect {
        if self.pending_removal != Some(id) {
            warn!("finishing removal of {} while {:?} was pending", id, self.pending_removal);
        }

        if self.store.get(id).is_some_and(|item| !item.completed) {
            self.apply(Command::Toggle(id));
        }
        self.pending_removal = None;
        debug!("removal of {} finished", id);

        // Re-render even when nothing was removed, to clear the row's fade
        Effect::Render
    }

    fn checkbox_changed(&mut self, id: ItemId) -> Effect {
        let Some(item) = self.store.get(id) else {
            return Effect::Nothing;
        };

        if self.pending_removal.is_some() {
            debug!("checkbox {} locked while a removal is pending", id);
            return Effect::Revert;
        }

        if item.completed {
            return self.render_if_changed(Command::Toggle(id));
        }

        if !self.confirm(CONFIRM_COMPLETE_MESSAGE) {
            return Effect::Revert;
        }

        self.pending_removal = Some(id);
        Effect::ScheduleRemoval {
            id,
            delay: self.store.config().removal_delay,
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.store.settings().disable_confirmation || self.prompter.confirm(message)
    }

    fn render_if_changed(&mut self, command: Command) -> Effect {
        if self.apply(command).changed() {
            Effect::Render
        } else {
            Effect::Nothing
        }
    }

    /// Dispatch, alerting the user when the item list could not be saved
    fn apply(&mut self, command: Command) -> Outcome {
        let is_settings = matches!(command, Command::SetSettings(_));
        let outcome = self.store.dispatch(command);
        if outcome.save_error().is_some() && !is_settings {
            self.prompter.alert(SAVE_FAILED_MESSAGE);
        }
        outcome
    }
}
