//! Task data model
//!
//! The task collection itself is owned by the parent component; this module
//! only defines the record shape, its enumerations and the creation payload
//! emitted by the entry form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Validation failures raised while building or parsing task data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task text cannot be empty")]
    EmptyText,
    #[error("unknown priority '{0}'")]
    UnknownPriority(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// Opaque task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Next priority in the low → medium → high order, saturating at the ends
    #[must_use]
    pub fn raised(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// Previous priority in the low → medium → high order, saturating at the ends
    #[must_use]
    pub fn lowered(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ValidationError::UnknownPriority(other.to_string())),
        }
    }
}

// Records written by other clients may carry values this build does not know.
impl From<String> for Priority {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    #[default]
    General,
    Work,
    Study,
    Personal,
    Health,
    Finance,
}

impl Category {
    /// Categories in the order the dropdown lists them
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Work,
        Category::Study,
        Category::Personal,
        Category::Health,
        Category::Finance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Work => "work",
            Self::Study => "study",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Finance => "finance",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Finance => "Finance",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or(ValidationError::UnknownCategory(wanted))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Trim task text and reject it when nothing is left
pub fn normalize_text(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyText)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Payload of a creation event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    /// Due instant in epoch milliseconds
    pub due_date: Option<i64>,
    pub priority: Priority,
    pub category: Category,
}

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            due_date: None,
            priority: None,
            category: None,
        }
    }

    pub fn from_new(id: TaskId, new_task: NewTask) -> Self {
        Self {
            id,
            text: new_task.text,
            completed: false,
            due_date: new_task.due_date,
            priority: Some(new_task.priority),
            category: Some(new_task.category),
        }
    }

    pub fn with_due_date(mut self, due_date: i64) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Effective priority, defaulting for records created before priorities existed
    pub fn priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Effective category, defaulting for records created before categories existed
    pub fn category(&self) -> Category {
        self.category.unwrap_or_default()
    }
}
