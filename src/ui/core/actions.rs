use super::delay::{DelayRequest, DelayTarget, DelayToken};
use crate::notify::Severity;
use crate::task::{NewTask, TaskId};

/// Which half of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Form,
    #[default]
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Outbound task events
    CreateTask(NewTask),
    ToggleCompletion(TaskId),
    DeleteTask(TaskId),
    EditTask {
        id: TaskId,
        text: String,
    },
    SelectTask(TaskId),

    // Notifications
    Notify {
        message: String,
        severity: Severity,
    },

    // Artificial delays
    ScheduleDelay(DelayRequest),
    DelayElapsed {
        target: DelayTarget,
        token: DelayToken,
    },

    // Navigation
    SetFocus(Focus),

    // Selection mode
    ToggleSelectionMode,
    CompleteSelected,
    DeleteSelected,

    // UI operations
    CycleIconTheme,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
