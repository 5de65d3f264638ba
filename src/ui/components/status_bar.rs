//! Status bar component
//!
//! Shows the most recent notification for a few seconds, otherwise the key
//! hints for whatever currently has focus.

use chrono::{DateTime, Duration, Local};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::clock::SharedClock;
use crate::notify::{Notifier, Severity};
use crate::utils::color::{AMBER_400, EMERALD_500, ROSE_500, SLATE_300, SLATE_500};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub expires_at: DateTime<Local>,
}

/// Status bar component
pub struct StatusBar {
    clock: SharedClock,
    toast_duration: Duration,
    toast: Option<Toast>,
    hints: &'static str,
}

impl StatusBar {
    pub fn new(clock: SharedClock, toast_seconds: u64) -> Self {
        Self {
            clock,
            toast_duration: Duration::seconds(i64::try_from(toast_seconds).unwrap_or(i64::MAX / 1000)),
            toast: None,
            hints: "",
        }
    }

    pub fn set_hints(&mut self, hints: &'static str) {
        self.hints = hints;
    }

    /// The toast still on screen, if any
    pub fn current_toast(&self) -> Option<&Toast> {
        let now = self.clock.now();
        self.toast.as_ref().filter(|toast| toast.expires_at > now)
    }

    pub fn dismiss(&mut self) {
        self.toast = None;
    }

    fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Info => SLATE_300,
            Severity::Success => EMERALD_500,
            Severity::Warning => AMBER_400,
            Severity::Error => ROSE_500,
        }
    }

    /// Render the status bar
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let status_bar = match self.current_toast() {
            Some(toast) => Paragraph::new(toast.message.clone()).style(
                Style::default()
                    .fg(Self::severity_color(toast.severity))
                    .add_modifier(Modifier::BOLD),
            ),
            None => Paragraph::new(self.hints).style(Style::default().fg(SLATE_500)),
        };

        f.render_widget(status_bar.alignment(Alignment::Center), area);
    }
}

impl Notifier for StatusBar {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Info | Severity::Success => log::info!("{}", message),
        }
        self.toast = Some(Toast {
            message: message.to_string(),
            severity,
            expires_at: self.clock.now() + self.toast_duration,
        });
    }
}
