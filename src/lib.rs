//! TaskMaster - a terminal task manager
//!
//! A keyboard and mouse driven task list with due dates, priorities and
//! categories, built with Ratatui.
//!
//! # Modules
//!
//! * [`task`] - Task record, priorities, categories and validation
//! * [`clock`] - Injectable time source
//! * [`notify`] - Notification severities and the `Notifier` seam
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date formatting and colour helpers

/// Injectable time source
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// User-facing notification types
pub mod notify;

/// Task data model
pub mod task;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;
