//! Store Commands
//!
//! Every mutation the view can request, plus what came of it.

use crate::error::StoreError;
use crate::model::{ItemId, Settings};

/// A mutation request consumed by `TodoStore::dispatch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an item from raw user text
    Add(String),
    /// Flip completion; completing an item removes it
    Toggle(ItemId),
    /// Remove an item
    Delete(ItemId),
    /// Replace an item's text with raw user text
    Edit(ItemId, String),
    /// Replace and persist the settings
    SetSettings(Settings),
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing matched or the input was rejected
    Unchanged,
    /// State changed and was written to storage
    Saved,
    /// State changed in memory but the storage write failed
    SaveFailed(StoreError),
}

impl Outcome {
    /// Whether in-memory state changed and the view needs a re-render
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }

    pub fn save_error(&self) -> Option<&StoreError> {
        match self {
            Outcome::SaveFailed(err) => Some(err),
            _ => None,
        }
    }
}
