//! Reusable UI components

pub mod footer;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod task_entry_form;
pub mod task_list_component;
pub mod task_list_item_component;
pub mod text_input;

// Component exports
pub use footer::Footer;
pub use status_bar::StatusBar;
pub use task_entry_form::{FormField, FormState, TaskEntryForm};
pub use task_list_component::TaskListComponent;
pub use task_list_item_component::{ItemMode, TaskListItemComponent};
pub use text_input::TextInput;
