//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is a
//! render snapshot of the controller; the controller stays the source of
//! truth and is copied in here after every handled intent.

use reactive_stores::Store;
use todo_store::RowView;

/// What the page renders
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows in display order
    pub rows: Vec<RowView>,
    /// Mirrors the persisted "disable confirmation" setting
    pub disable_confirmation: bool,
    /// Current text of the new-item input
    pub input: String,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;
