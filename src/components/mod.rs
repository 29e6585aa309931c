//! UI Components
//!
//! Leptos components for the todo list page.

mod new_item_form;
mod settings_panel;
mod todo_list;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use settings_panel::SettingsPanel;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
