//! Todo Models
//!
//! Items and settings exactly as they are stored under the browser keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item identifier: creation time in epoch milliseconds
pub type ItemId = i64;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the list
    pub id: ItemId,
    /// HTML-escaped text, safe to inject as markup
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Creation time, stored as an ISO-8601 string
    pub created: DateTime<Utc>,
}

impl Item {
    /// Create an incomplete item. `text` must already be sanitized.
    pub fn new(id: ItemId, text: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created,
        }
    }
}

/// Persisted user settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Skip the confirm dialogs for completing and deleting
    #[serde(rename = "disableAlert", default)]
    pub disable_confirmation: bool,
}
