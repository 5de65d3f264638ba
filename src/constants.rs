//! Constants used throughout the application
//!
//! This module centralizes UI text, brand strings and other constant values
//! to improve maintainability and consistency.

// Brand
pub const BRAND_NAME: &str = "TaskMaster";
pub const BRAND_AUTHOR: &str = "Leirad Noznag";
pub const COPYRIGHT_HOLDER: &str = "TaskMaster Inc.";
pub const FOOTER_LINKS: [&str; 4] = ["About", "Features", "Privacy", "Contact"];

// Entry form text
pub const PLACEHOLDER_NEW_TASK: &str = "What needs to be done?";
pub const LABEL_SET_DUE_DATE: &str = "Set Due Date";
pub const LABEL_SELECT_CATEGORY: &str = "Select Category";
pub const LABEL_HIGH_PRIORITY: &str = "High Priority";

// Due date labels
pub const LABEL_TODAY: &str = "Today";
pub const LABEL_TOMORROW: &str = "Tomorrow";
pub const INVALID_DATE: &str = "Invalid Date";
pub const DUE_SEPARATOR: &str = " • ";

// Notifications
pub const WARNING_EMPTY_TASK: &str = "Please enter a task description.";
pub const SUCCESS_TASK_CREATED: &str = "Task added";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted";
pub const SUCCESS_TASKS_COMPLETED: &str = "Selected tasks completed";
pub const SUCCESS_TASKS_DELETED: &str = "Selected tasks deleted";
pub const INFO_NOTHING_SELECTED: &str = "No tasks selected";

// Empty states
pub const EMPTY_LIST: &str = "No tasks yet. Press 'a' to add one.";

// Status bar key hints
pub const HINTS_LIST: &str = "a: add • space: toggle • e: edit • d: delete • v: select • q: quit";
pub const HINTS_SELECTION: &str = "space: select • c: complete selected • x: delete selected • esc: done";
pub const HINTS_FORM: &str = "enter: add • tab: next field • ↑/↓: due date • esc: back to list";
pub const HINTS_EDITING: &str = "enter: save • esc: cancel";

// Config
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "taskmaster.toml";
pub const APP_DIR_NAME: &str = "taskmaster";
pub const LOG_FILE_NAME: &str = "taskmaster.log";

// Limits
/// Upper bound for the artificial delays in milliseconds
pub const MAX_DELAY_MS: u64 = 10_000;
/// Upper bound for toast visibility in seconds
pub const MAX_TOAST_SECONDS: u64 = 60;
/// Narrowest content column that still fits the metadata row
pub const MIN_CONTENT_WIDTH: u16 = 40;
/// Rows taken by one task list item
pub const ITEM_HEIGHT: u16 = 2;
