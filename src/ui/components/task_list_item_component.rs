//! A single task row
//!
//! Two terminal rows per task: the toggle, text and inline actions on the
//! first; category, priority badge and due date on the second. Inline
//! editing and the save delay are owned here; everything else is reported
//! to the parent as an [`Action`].

use crate::clock::SharedClock;
use crate::config::DisplayConfig;
use crate::constants::{ITEM_HEIGHT, LABEL_HIGH_PRIORITY};
use crate::icons::IconService;
use crate::task::{normalize_text, Priority, Task, TaskId};
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, AppContext, Component, DelayRequest, DelayTarget, DelayToken, HitLine, HitMap};
use crate::utils::color::{
    accent_bar_color, category_color, priority_color, AMBER_600, EMERALD_500, INDIGO_400, ROSE_500, ROSE_600,
    SLATE_300, SLATE_400, SLATE_500, SLATE_800,
};
use crate::utils::datetime::{format_full_datetime, is_due_today, is_overdue};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display state of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemMode {
    Viewing,
    Editing { buffer: TextInput },
    /// Waiting for the save delay; `text` is already trimmed
    Saving { text: String, token: DelayToken },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemHit {
    Body,
    Checkbox,
    Text,
    Edit,
    Undo,
    Delete,
    Save,
    Cancel,
}

pub struct TaskListItemComponent {
    task: Task,
    mode: ItemMode,
    selection_mode: bool,
    is_selected: bool,
    focused: bool,
    hovered: bool,
    hits: HitMap<ItemHit>,
    clock: SharedClock,
    icons: IconService,
    display: DisplayConfig,
    save_delay: Duration,
}

impl TaskListItemComponent {
    pub fn new(task: Task, ctx: &AppContext) -> Self {
        Self {
            task,
            mode: ItemMode::Viewing,
            selection_mode: false,
            is_selected: false,
            focused: false,
            hovered: false,
            hits: HitMap::new(),
            clock: ctx.clock.clone(),
            icons: ctx.icons.clone(),
            display: ctx.config.display.clone(),
            save_delay: ctx.config.timing.save_delay(),
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn id(&self) -> &TaskId {
        &self.task.id
    }

    pub fn mode(&self) -> &ItemMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ItemMode::Editing { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.mode, ItemMode::Saving { .. })
    }

    /// Text currently in the edit buffer
    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.mode {
            ItemMode::Editing { buffer } => Some(buffer.value()),
            _ => None,
        }
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Replace the task data; edit state survives
    pub fn set_task(&mut self, task: Task) {
        self.task = task;
    }

    pub fn set_selection_mode(&mut self, selection_mode: bool) {
        self.selection_mode = selection_mode;
        if selection_mode && self.is_editing() {
            self.mode = ItemMode::Viewing;
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_overdue(&self) -> bool {
        is_overdue(self.task.due_date, self.task.completed, self.clock.now())
    }

    pub fn is_due_today(&self) -> bool {
        is_due_today(self.task.due_date, self.task.completed, self.clock.now())
    }

    /// Left accent bar colour; `None` means the bar is not drawn
    pub fn accent_color(&self) -> Option<Color> {
        accent_bar_color(self.task.priority(), self.task.completed)
    }

    pub fn shows_high_priority_badge(&self) -> bool {
        !self.task.completed && self.task.priority() == Priority::High
    }

    /// Colour of the full due datetime
    pub fn due_color(&self) -> Color {
        if self.task.completed {
            SLATE_500
        } else if self.is_overdue() {
            ROSE_600
        } else if self.is_due_today() {
            AMBER_600
        } else {
            SLATE_400
        }
    }

    fn actions_visible(&self) -> bool {
        (self.hovered || self.focused) && !self.selection_mode
    }

    /// Circular toggle, or the selection square in selection mode
    pub fn click_checkbox(&mut self) -> Action {
        if self.selection_mode {
            return Action::SelectTask(self.task.id.clone());
        }
        match self.mode {
            ItemMode::Viewing => Action::ToggleCompletion(self.task.id.clone()),
            _ => Action::None,
        }
    }

    /// Clicking the text toggles completion, exactly like the checkbox
    pub fn click_text(&mut self) -> Action {
        self.click_checkbox()
    }

    /// Anywhere on the item; only meaningful in selection mode
    pub fn click_body(&mut self) -> Action {
        if self.selection_mode {
            Action::SelectTask(self.task.id.clone())
        } else {
            Action::None
        }
    }

    pub fn begin_edit(&mut self) -> bool {
        if self.selection_mode || self.task.completed || self.mode != ItemMode::Viewing {
            return false;
        }
        log::debug!("Editing task {}", self.task.id);
        self.mode = ItemMode::Editing {
            buffer: TextInput::with_value(self.task.text.clone()),
        };
        true
    }

    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            log::debug!("Edit of task {} cancelled", self.task.id);
            self.mode = ItemMode::Viewing;
        }
    }

    /// Blank text silently reverts; anything else starts the save delay
    pub fn confirm_edit(&mut self) -> Action {
        let ItemMode::Editing { buffer } = &self.mode else {
            return Action::None;
        };

        match normalize_text(buffer.value()) {
            Ok(text) => {
                let request = DelayRequest::new(DelayTarget::Item(self.task.id.clone()), self.save_delay);
                log::debug!("Saving task {} (token {})", self.task.id, request.token.value());
                self.mode = ItemMode::Saving {
                    text,
                    token: request.token,
                };
                Action::ScheduleDelay(request)
            }
            Err(e) => {
                log::debug!("Edit of task {} reverted: {}", self.task.id, e);
                self.mode = ItemMode::Viewing;
                Action::None
            }
        }
    }

    /// Re-open a completed task
    pub fn undo(&mut self) -> Action {
        if self.task.completed && !self.selection_mode && self.mode == ItemMode::Viewing {
            Action::ToggleCompletion(self.task.id.clone())
        } else {
            Action::None
        }
    }

    pub fn delete(&mut self) -> Action {
        if self.selection_mode || self.mode != ItemMode::Viewing {
            return Action::None;
        }
        Action::DeleteTask(self.task.id.clone())
    }

    fn finish_save(&mut self, token: DelayToken) -> Action {
        match &self.mode {
            ItemMode::Saving { text, token: current } if *current == token => {
                let action = Action::EditTask {
                    id: self.task.id.clone(),
                    text: text.clone(),
                };
                self.mode = ItemMode::Viewing;
                action
            }
            _ => {
                log::debug!("Ignoring stale save delay {} for task {}", token.value(), self.task.id);
                Action::None
            }
        }
    }

    fn handle_hit(&mut self, hit: ItemHit) -> Action {
        if self.selection_mode {
            return self.click_body();
        }
        match hit {
            ItemHit::Checkbox => self.click_checkbox(),
            ItemHit::Text => self.click_text(),
            ItemHit::Edit => {
                self.begin_edit();
                Action::None
            }
            ItemHit::Undo => self.undo(),
            ItemHit::Delete => self.delete(),
            ItemHit::Save => self.confirm_edit(),
            ItemHit::Cancel => {
                self.cancel_edit();
                Action::None
            }
            ItemHit::Body => Action::None,
        }
    }

    fn text_style(&self) -> Style {
        if self.task.completed {
            Style::default().fg(SLATE_500).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn render_main_row(&mut self, f: &mut Frame, row: Rect) {
        let icons = self.icons.icons();
        let action_style = Style::default().fg(SLATE_300);

        // Right-hand controls, built first so the text knows how much room it has
        let mut controls: Vec<(Span<'static>, ItemHit)> = Vec::new();
        match &self.mode {
            ItemMode::Editing { .. } => {
                controls.push((
                    Span::styled(format!(" {} ", icons.action.save), Style::default().fg(EMERALD_500)),
                    ItemHit::Save,
                ));
                controls.push((Span::styled(format!(" {} ", icons.action.cancel), action_style), ItemHit::Cancel));
            }
            ItemMode::Saving { .. } => {
                controls.push((
                    Span::styled(format!(" {} ", self.icons.spinner()), Style::default().fg(INDIGO_400)),
                    ItemHit::Body,
                ));
            }
            ItemMode::Viewing if self.actions_visible() => {
                if self.task.completed {
                    controls.push((Span::styled(format!(" {} ", icons.action.undo), action_style), ItemHit::Undo));
                } else {
                    controls.push((Span::styled(format!(" {} ", icons.action.edit), action_style), ItemHit::Edit));
                }
                controls.push((
                    Span::styled(format!(" {} ", icons.action.delete), Style::default().fg(ROSE_500)),
                    ItemHit::Delete,
                ));
            }
            ItemMode::Viewing => {}
        }
        let controls_width: u16 = controls
            .iter()
            .map(|(span, _)| u16::try_from(span.width()).unwrap_or(0))
            .sum();

        let mut line = HitLine::new(row);

        // Accent bar: blank column when completed
        match self.accent_color() {
            Some(color) => line.push(Span::styled(icons.meta.accent_bar, Style::default().fg(color))),
            None => line.push(Span::raw(" ")),
        }

        if self.selection_mode {
            let style = if self.is_selected {
                Style::default().fg(INDIGO_400).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SLATE_400)
            };
            line.push_hit(Span::styled(format!("{} ", self.icons.selection(self.is_selected)), style), ItemHit::Body);
        } else {
            let style = Style::default().fg(priority_color(self.task.priority(), self.task.completed));
            line.push_hit(
                Span::styled(format!("{} ", self.icons.checkbox(self.task.completed)), style),
                ItemHit::Checkbox,
            );
        }

        let text_start = line.width();
        let text_room = usize::from(row.width.saturating_sub(text_start + controls_width));
        match &self.mode {
            ItemMode::Editing { buffer } => {
                let (shown, cursor_col) = buffer.visible(text_room);
                line.push(Span::styled(shown, Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)));
                let cursor_x = row.x + text_start + u16::try_from(cursor_col).unwrap_or(0);
                f.set_cursor_position(Position::new(cursor_x, row.y));
            }
            ItemMode::Saving { text, .. } => {
                line.push(Span::styled(truncate(text, text_room), Style::default().fg(SLATE_400)));
            }
            ItemMode::Viewing => {
                line.push_hit(
                    Span::styled(truncate(&self.task.text, text_room), self.text_style()),
                    ItemHit::Text,
                );
            }
        }

        line.pad_to(row.width.saturating_sub(controls_width));
        for (span, hit) in controls {
            line.push_hit(span, hit);
        }

        let rendered = line.finish(&mut self.hits);
        f.render_widget(Paragraph::new(rendered), row);
    }

    fn render_meta_row(&mut self, f: &mut Frame, row: Rect) {
        let completed = self.task.completed;
        let category = self.task.category();
        let mut line = HitLine::new(row);
        line.push(Span::raw("   "));

        line.push(Span::styled(
            format!("{} {}", self.icons.category(category), category.label()),
            Style::default().fg(category_color(category, completed)),
        ));

        if self.shows_high_priority_badge() {
            line.push(Span::raw("  "));
            line.push(Span::styled(
                format!("{} {}", self.icons.icons().meta.flag, LABEL_HIGH_PRIORITY),
                Style::default().fg(ROSE_500).add_modifier(Modifier::BOLD),
            ));
        }

        if let Some(due) = self.task.due_date {
            line.push(Span::raw("  "));
            line.push(Span::styled(
                format!(
                    "{} {}",
                    self.icons.due_date(),
                    format_full_datetime(due, &self.display.full_datetime_format)
                ),
                Style::default().fg(self.due_color()),
            ));
        }

        let rendered = line.finish(&mut self.hits);
        f.render_widget(Paragraph::new(rendered), row);
    }
}

/// Cut `text` to `max_width` display columns, marking the cut with an ellipsis
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut shown = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        shown.push(c);
        used += w;
    }
    shown.push('…');
    shown
}

impl Component for TaskListItemComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_editing() {
            return match key.code {
                KeyCode::Enter => self.confirm_edit(),
                KeyCode::Esc => {
                    self.cancel_edit();
                    Action::None
                }
                _ => {
                    if let ItemMode::Editing { buffer } = &mut self.mode {
                        buffer.handle_key(key);
                    }
                    Action::None
                }
            };
        }

        if self.is_saving() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.click_checkbox(),
            KeyCode::Char('e') => {
                self.begin_edit();
                Action::None
            }
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.hits.hit(mouse.column, mouse.row) {
                Some(hit) => self.handle_hit(hit),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::DelayElapsed {
                target: DelayTarget::Item(id),
                token,
            } if id == self.task.id => self.finish_save(token),
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.hits.clear();
        self.hits.push(rect, ItemHit::Body);

        if self.focused || (self.selection_mode && self.is_selected) {
            f.render_widget(Block::default().style(Style::default().bg(SLATE_800)), rect);
        }

        if rect.height == 0 {
            return;
        }
        self.render_main_row(f, Rect::new(rect.x, rect.y, rect.width, 1));
        if rect.height >= ITEM_HEIGHT {
            self.render_meta_row(f, Rect::new(rect.x, rect.y + 1, rect.width, 1));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
