//! Core UI building blocks.
//!
//! - [`actions`] - messages components pass upward
//! - [`component`] - the trait every widget implements
//! - [`context`] - shared clock, icons and config
//! - [`delay`] - cancellable artificial delays
//! - [`dismiss`] - click-outside detection for popups
//! - [`event_handler`] - terminal input polling
//! - [`interactive`] - mouse hit regions recorded at render time
//! - [`task_manager`] - background timers feeding actions back to the app

pub mod actions;
pub mod component;
pub mod context;
pub mod delay;
pub mod dismiss;
pub mod event_handler;
pub mod interactive;
pub mod task_manager;

pub use actions::{Action, Focus};
pub use component::Component;
pub use context::AppContext;
pub use delay::{DelayRequest, DelayTarget, DelayToken};
pub use dismiss::OutsideDismiss;
pub use event_handler::{EventHandler, EventType};
pub use interactive::{HitLine, HitMap, InteractiveArea};
pub use task_manager::TaskManager;
