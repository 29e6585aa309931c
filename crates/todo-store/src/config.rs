//! Store Configuration

use std::time::Duration;

/// Storage keys and timing used by the store and controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key holding the JSON array of items
    pub items_key: String,
    /// Key holding the JSON settings object
    pub settings_key: String,
    /// How long a completed row stays visible before it is removed
    pub removal_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            items_key: "todos".to_string(),
            settings_key: "todoSettings".to_string(),
            removal_delay: Duration::from_millis(250),
        }
    }
}
