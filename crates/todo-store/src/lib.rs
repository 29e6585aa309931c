//! Todo Store
//!
//! Browser-independent core of the todo list:
//! - model: items and settings as persisted
//! - sanitize: HTML escaping of free text
//! - storage: key-value storage abstraction
//! - store: the persisted item list and its commands
//! - controller: confirmation, lock and delayed-removal policies
//! - display: row ordering and timestamp formatting

pub mod command;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod model;
pub mod sanitize;
pub mod storage;
pub mod store;

pub use command::{Command, Outcome};
pub use config::StoreConfig;
pub use controller::{Effect, Intent, ListController, Prompter};
pub use display::{display_order, format_created, rows, RowView};
pub use error::{StorageError, StoreError, StoreResult};
pub use model::{Item, ItemId, Settings};
pub use sanitize::{escape_html, sanitize_input, unescape_html};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{Clock, SystemClock, TodoStore};
