//! Todo Store
//!
//! Owns the item list and settings, and keeps them in sync with storage.
//!
//! Mutations are applied in memory first, then persisted. A failed write
//! never rolls the in-memory change back; it is reported through
//! `Outcome::SaveFailed` so the caller can warn the user.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::command::{Command, Outcome};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::{Item, ItemId, Settings};
use crate::sanitize::sanitize_input;
use crate::storage::KeyValueStorage;

/// Source of "now" for item ids and timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F: Fn() -> DateTime<Utc>> Clock for F {
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// The item list and settings bound to one storage backend
pub struct TodoStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    items: Vec<Item>,
    settings: Settings,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Empty store; nothing is read from storage
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            config,
            items: Vec::new(),
            settings: Settings::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Store populated from whatever is persisted, settings first
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let mut store = Self::new(storage, config);
        store.restore_settings();
        store.restore();
        store
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ========================
    // Accessors
    // ========================

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Mutations
    // ========================

    /// Apply a command
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add(text) => self.add(&text),
            Command::Toggle(id) => self.toggle(id),
            Command::Delete(id) => self.delete(id),
            Command::Edit(id, text) => self.edit(id, &text),
            Command::SetSettings(settings) => self.set_settings(settings),
        }
    }

    /// Append a new item; blank input is ignored
    pub fn add(&mut self, text: &str) -> Outcome {
        let Some(text) = sanitize_input(text) else {
            return Outcome::Unchanged;
        };

        let created = self.clock.now();
        let id = self.next_id(created.timestamp_millis());
        self.items.push(Item::new(id, text, created));
        debug!("added item {}", id);

        self.save_items()
    }

    /// Flip completion. Completing an item removes it from the list;
    /// un-completing a restored completed item keeps it.
    pub fn toggle(&mut self, id: ItemId) -> Outcome {
        let Some(index) = self.position(id) else {
            return Outcome::Unchanged;
        };

        if self.items[index].completed {
            self.items[index].completed = false;
            debug!("reopened item {}", id);
        } else {
            self.items.remove(index);
            debug!("completed and removed item {}", id);
        }

        self.save_items()
    }

    pub fn delete(&mut self, id: ItemId) -> Outcome {
        let Some(index) = self.position(id) else {
            return Outcome::Unchanged;
        };

        self.items.remove(index);
        debug!("deleted item {}", id);

        self.save_items()
    }

    /// Replace the text of an item; blank input is ignored
    pub fn edit(&mut self, id: ItemId, text: &str) -> Outcome {
        let Some(index) = self.position(id) else {
            return Outcome::Unchanged;
        };
        let Some(text) = sanitize_input(text) else {
            return Outcome::Unchanged;
        };
        if self.items[index].text == text {
            return Outcome::Unchanged;
        }

        self.items[index].text = text;
        debug!("edited item {}", id);

        self.save_items()
    }

    pub fn set_settings(&mut self, settings: Settings) -> Outcome {
        self.settings = settings;

        match self.persist_settings() {
            Ok(()) => Outcome::Saved,
            Err(err) => {
                error!("failed to save settings: {}", err);
                Outcome::SaveFailed(err)
            }
        }
    }

    // ========================
    // Persistence
    // ========================

    /// Write the item list under the items key
    pub fn persist(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.items)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set(&self.config.items_key, &json)?;
        Ok(())
    }

    pub fn persist_settings(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.settings)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set(&self.config.settings_key, &json)?;
        Ok(())
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A payload that is not a JSON array is discarded: the key is removed
    /// and the list starts empty. Returns the number of items restored.
    pub fn restore(&mut self) -> usize {
        self.items.clear();

        let raw = match self.storage.get(&self.config.items_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(err) => {
                error!("failed to read items: {}", err);
                return 0;
            }
        };

        match parse_items(&self.config.items_key, &raw) {
            Ok(items) => {
                self.items = items;
                info!("restored {} items", self.items.len());
            }
            Err(err) => {
                error!("error loading items: {}", err);
                if let Err(err) = self.storage.remove(&self.config.items_key) {
                    warn!("failed to clear corrupt items: {}", err);
                }
            }
        }

        self.items.len()
    }

    /// Load settings; anything unreadable leaves the defaults in place
    pub fn restore_settings(&mut self) {
        let raw = match self.storage.get(&self.config.settings_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                error!("failed to read settings: {}", err);
                return;
            }
        };

        match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => self.settings = settings,
            Err(err) => warn!("ignoring invalid settings: {}", err),
        }
    }

    fn save_items(&mut self) -> Outcome {
        match self.persist() {
            Ok(()) => Outcome::Saved,
            Err(err) => {
                error!("error saving items: {}", err);
                Outcome::SaveFailed(err)
            }
        }
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// `candidate`, or one past the largest id if that is already taken.
    /// Falls back to the lowest free non-negative id when the largest is
    /// `ItemId::MAX`.
    fn next_id(&self, candidate: ItemId) -> ItemId {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) if candidate <= max => {
                max.checked_add(1).unwrap_or_else(|| self.lowest_free_id())
            }
            _ => candidate,
        }
    }

    fn lowest_free_id(&self) -> ItemId {
        // At most `items.len()` ids are taken, so this always finds one
        (0..ItemId::MAX)
            .find(|id| self.position(*id).is_none())
            .unwrap_or(ItemId::MIN)
    }
}

/// Parse an items payload. Malformed or duplicate entries inside a valid
/// array are dropped; anything other than an array is corrupt.
fn parse_items(key: &str, raw: &str) -> StoreResult<Vec<Item>> {
    let corrupt = |reason: String| StoreError::Corrupt {
        key: key.to_string(),
        reason,
    };

    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;
    let serde_json::Value::Array(entries) = value else {
        return Err(corrupt("invalid todos data structure".to_string()));
    };

    let mut items: Vec<Item> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Item>(entry) {
            Ok(item) if items.iter().any(|existing| existing.id == item.id) => {
                warn!("dropping duplicate item id {} at index {}", item.id, index);
            }
            Ok(item) => items.push(item),
            Err(err) => warn!("dropping malformed item at index {}: {}", index, err),
        }
    }
    Ok(items)
}
