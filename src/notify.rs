//! User-facing notifications
//!
//! Components never display messages themselves; they emit
//! [`Action::Notify`](crate::ui::core::Action::Notify) and the parent hands the
//! message to whatever [`Notifier`] it owns.

use std::fmt;

/// Classification of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}
