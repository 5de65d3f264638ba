//! Form for composing a new task
//!
//! Collapsed it is a single input line. Once focused (or holding text) it
//! expands to show the due date, category and priority controls. Submission
//! goes through a short artificial delay during which every control is
//! disabled; the creation event is emitted when the delay elapses.

use crate::clock::SharedClock;
use crate::config::DisplayConfig;
use crate::constants::{LABEL_SELECT_CATEGORY, LABEL_SET_DUE_DATE, PLACEHOLDER_NEW_TASK, WARNING_EMPTY_TASK};
use crate::icons::IconService;
use crate::task::{normalize_text, Category, NewTask, Priority};
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{
    Action, AppContext, Component, DelayRequest, DelayTarget, DelayToken, Focus, HitLine, HitMap, OutsideDismiss,
};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{priority_toggle_color, BLUE_600, GRAY_500, SLATE_300, SLATE_400, SLATE_500, SLATE_600};
use crate::utils::datetime::{clamped_due_timestamp, format_due_label, step_due_input};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Rows used while collapsed
pub const COLLAPSED_HEIGHT: u16 = 3;
/// Rows used while the metadata row is visible
pub const EXPANDED_HEIGHT: u16 = 4;

const DROPDOWN_WIDTH: u16 = 20;

/// Lifecycle of the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Collapsed,
    Expanded,
    /// Waiting for the submit delay; `pending` is what will be emitted
    Submitting { token: DelayToken, pending: NewTask },
}

/// Control that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    DueDate,
    Category,
    Priority,
}

impl FormField {
    const ORDER: [FormField; 4] = [FormField::Text, FormField::DueDate, FormField::Category, FormField::Priority];

    fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormHit {
    Input,
    Submit,
    DueDate,
    ClearDue,
    CategoryPill,
    CategoryOption(Category),
    Priority(Priority),
}

pub struct TaskEntryForm {
    text: TextInput,
    due: TextInput,
    priority: Priority,
    category: Category,
    state: FormState,
    field: FormField,
    focused: bool,
    dropdown_open: bool,
    dropdown_cursor: usize,
    dismiss: OutsideDismiss,
    hits: HitMap<FormHit>,
    category_anchor: Option<Rect>,
    clock: SharedClock,
    icons: IconService,
    display: DisplayConfig,
    submit_delay: Duration,
}

impl TaskEntryForm {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            text: TextInput::new(),
            due: TextInput::new(),
            priority: Priority::default(),
            category: Category::default(),
            state: FormState::Collapsed,
            field: FormField::Text,
            focused: false,
            dropdown_open: false,
            dropdown_cursor: 0,
            dismiss: OutsideDismiss::new(),
            hits: HitMap::new(),
            category_anchor: None,
            clock: ctx.clock.clone(),
            icons: ctx.icons.clone(),
            display: ctx.config.display.clone(),
            submit_delay: ctx.config.timing.submit_delay(),
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_expanded(&self) -> bool {
        !matches!(self.state, FormState::Collapsed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn focused_field(&self) -> FormField {
        self.field
    }

    pub fn text(&self) -> &str {
        self.text.value()
    }

    pub fn due_input(&self) -> &str {
        self.due.value()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Rows this form wants in the current state
    pub fn height(&self) -> u16 {
        if self.is_expanded() {
            EXPANDED_HEIGHT
        } else {
            COLLAPSED_HEIGHT
        }
    }

    fn expand(&mut self) {
        if self.state == FormState::Collapsed {
            log::debug!("Entry form expanded");
            self.state = FormState::Expanded;
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.is_submitting() {
            return;
        }
        self.text.set_value(text);
        if !self.text.is_empty() {
            self.expand();
        }
    }

    pub fn set_due_input(&mut self, input: &str) {
        if !self.is_submitting() {
            self.due.set_value(input);
        }
    }

    pub fn clear_due_date(&mut self) {
        if !self.is_submitting() {
            self.due.clear();
        }
    }

    /// Move the due date by `steps` picker increments, never into the past
    pub fn step_due_date(&mut self, steps: i64) {
        if self.is_submitting() {
            return;
        }
        let minutes = steps * i64::from(self.display.due_step_minutes);
        let stepped = step_due_input(self.due.value(), minutes, self.clock.now());
        self.due.set_value(stepped);
    }

    pub fn set_priority(&mut self, priority: Priority) {
        if !self.is_submitting() {
            self.priority = priority;
        }
    }

    pub fn select_category(&mut self, category: Category) {
        if self.is_submitting() {
            return;
        }
        self.category = category;
        self.close_dropdown();
    }

    pub fn open_dropdown(&mut self) {
        if self.is_submitting() || self.dropdown_open {
            return;
        }
        self.dropdown_open = true;
        self.dropdown_cursor = self.category.index();
        self.dismiss.arm();
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
        self.dismiss.disarm();
    }

    pub fn toggle_dropdown(&mut self) {
        if self.dropdown_open {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    /// True when `column`/`row` falls on one of the form's live controls,
    /// including anywhere on the open dropdown
    pub fn owns_position(&self, column: u16, row: u16) -> bool {
        if self.dropdown_open && self.dismiss.contains(column, row) {
            return true;
        }
        match self.hits.hit(column, row) {
            Some(FormHit::CategoryOption(_)) => self.dropdown_open,
            Some(_) => true,
            None => false,
        }
    }

    /// Validate the draft and start the submit delay
    pub fn submit(&mut self) -> Action {
        if self.is_submitting() {
            return Action::None;
        }

        let text = match normalize_text(self.text.value()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Rejected task submission: {}", e);
                return Action::warning(WARNING_EMPTY_TASK);
            }
        };

        let pending = NewTask {
            text,
            due_date: clamped_due_timestamp(self.due.value(), self.clock.now()),
            priority: self.priority,
            category: self.category,
        };

        let request = DelayRequest::new(DelayTarget::EntryForm, self.submit_delay);
        log::debug!("Entry form submitting (token {})", request.token.value());
        self.close_dropdown();
        self.state = FormState::Submitting {
            token: request.token,
            pending,
        };
        Action::ScheduleDelay(request)
    }

    fn finish_submit(&mut self, token: DelayToken) -> Action {
        let pending = match &self.state {
            FormState::Submitting { token: current, pending } if *current == token => pending.clone(),
            _ => {
                log::debug!("Ignoring stale submit delay {}", token.value());
                return Action::None;
            }
        };

        self.reset();
        Action::CreateTask(pending)
    }

    /// Back to a pristine collapsed draft
    fn reset(&mut self) {
        self.text.clear();
        self.due.clear();
        self.priority = Priority::default();
        self.category = Category::default();
        self.field = FormField::Text;
        self.close_dropdown();
        self.state = FormState::Collapsed;
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.dropdown_cursor = self.dropdown_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dropdown_cursor = (self.dropdown_cursor + 1).min(Category::ALL.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(category) = Category::ALL.get(self.dropdown_cursor) {
                    self.select_category(*category);
                }
            }
            KeyCode::Esc => self.close_dropdown(),
            KeyCode::Tab => {
                self.close_dropdown();
                self.field = self.field.next();
            }
            KeyCode::BackTab => {
                self.close_dropdown();
                self.field = self.field.previous();
            }
            _ => {}
        }
        Action::None
    }

    fn handle_field_key(&mut self, key: KeyEvent) -> Action {
        match self.field {
            FormField::Text => {
                if self.text.handle_key(key) && !self.text.is_empty() {
                    self.expand();
                }
            }
            FormField::DueDate => match key.code {
                KeyCode::Up => self.step_due_date(1),
                KeyCode::Down => self.step_due_date(-1),
                KeyCode::Delete => self.clear_due_date(),
                _ => {
                    self.due.handle_key(key);
                }
            },
            FormField::Category => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Down) {
                    self.open_dropdown();
                }
            }
            FormField::Priority => match key.code {
                KeyCode::Left => self.set_priority(self.priority.lowered()),
                KeyCode::Right => self.set_priority(self.priority.raised()),
                KeyCode::Char('l') => self.set_priority(Priority::Low),
                KeyCode::Char('m') => self.set_priority(Priority::Medium),
                KeyCode::Char('h') => self.set_priority(Priority::High),
                _ => {}
            },
        }
        Action::None
    }

    fn handle_hit(&mut self, hit: FormHit) -> Action {
        match hit {
            FormHit::Input => {
                self.field = FormField::Text;
                self.expand();
            }
            FormHit::Submit => return self.submit(),
            FormHit::DueDate => {
                self.field = FormField::DueDate;
                if self.due.is_empty() {
                    self.step_due_date(0);
                }
            }
            FormHit::ClearDue => self.clear_due_date(),
            FormHit::CategoryPill => {
                self.field = FormField::Category;
                self.toggle_dropdown();
            }
            FormHit::CategoryOption(category) => self.select_category(category),
            FormHit::Priority(priority) => {
                self.field = FormField::Priority;
                self.set_priority(priority);
            }
        }
        Action::None
    }

    fn control_style(&self, active: bool) -> Style {
        if self.is_submitting() {
            Style::default().fg(SLATE_600)
        } else if active {
            Style::default().fg(Color::White).bg(SLATE_600)
        } else {
            Style::default().fg(SLATE_300)
        }
    }

    fn due_label(&self) -> String {
        if self.due.is_empty() {
            LABEL_SET_DUE_DATE.to_string()
        } else if self.focused && self.field == FormField::DueDate && !self.is_submitting() {
            self.due.value().to_string()
        } else {
            format_due_label(
                self.due.value(),
                self.clock.now(),
                &self.display.time_format,
                &self.display.short_date_format,
            )
        }
    }

    fn render_input_row(&mut self, f: &mut Frame, row: Rect) {
        let submitting = self.is_submitting();
        let submit_label = if submitting {
            format!(" {} Adding ", self.icons.spinner())
        } else {
            format!(" {} Add ", self.icons.icons().action.add)
        };
        let submit_width = u16::try_from(submit_label.width()).unwrap_or(0);
        let input_width = row.width.saturating_sub(submit_width + 1);

        let input_rect = Rect::new(row.x, row.y, input_width, 1);
        let (shown, cursor_col) = self.text.visible(usize::from(input_width));
        let text = if self.text.is_empty() {
            Span::styled(PLACEHOLDER_NEW_TASK, Style::default().fg(SLATE_500))
        } else if submitting {
            Span::styled(shown, Style::default().fg(SLATE_400))
        } else {
            Span::raw(shown)
        };
        f.render_widget(Paragraph::new(Line::from(text)), input_rect);
        self.hits.push(input_rect, FormHit::Input);

        let submit_rect = Rect::new(row.x + row.width.saturating_sub(submit_width), row.y, submit_width, 1);
        let submit_style = if submitting {
            Style::default().fg(SLATE_400).bg(SLATE_600)
        } else {
            Style::default().fg(Color::White).bg(BLUE_600).add_modifier(Modifier::BOLD)
        };
        f.render_widget(Paragraph::new(Span::styled(submit_label, submit_style)), submit_rect);
        self.hits.push(submit_rect, FormHit::Submit);

        if self.focused && self.field == FormField::Text && !submitting {
            let cursor_x = row.x + u16::try_from(cursor_col).unwrap_or(0);
            f.set_cursor_position(Position::new(cursor_x, row.y));
        }
    }

    fn render_meta_row(&mut self, f: &mut Frame, row: Rect) {
        let icons = self.icons.icons();
        let mut line = HitLine::new(row);

        // Due date pill
        let due_active = self.focused && self.field == FormField::DueDate;
        let due_style = self.control_style(due_active);
        line.push_hit(
            Span::styled(format!(" {} {} ", self.icons.due_date(), self.due_label()), due_style),
            FormHit::DueDate,
        );
        if !self.due.is_empty() {
            line.push_hit(Span::styled(format!("{} ", icons.action.clear), due_style), FormHit::ClearDue);
        }
        line.push(Span::raw(" "));

        // Category pill
        let category_active = self.focused && self.field == FormField::Category;
        let anchor = line.push_hit(
            Span::styled(
                format!(
                    " {} {} {} ",
                    self.icons.category(self.category),
                    self.category.label(),
                    self.icons.chevron(self.dropdown_open)
                ),
                self.control_style(category_active),
            ),
            FormHit::CategoryPill,
        );
        self.category_anchor = Some(anchor);
        line.push(Span::raw(" "));

        // Priority toggle
        let priority_active = self.focused && self.field == FormField::Priority;
        for priority in Priority::ALL {
            let label = match priority {
                Priority::Low => " Low ",
                Priority::Medium => " Medium ",
                Priority::High => " High ",
            };
            let style = if self.is_submitting() {
                Style::default().fg(SLATE_600)
            } else if priority == self.priority {
                let style = Style::default().fg(Color::White).bg(priority_toggle_color(priority));
                if priority_active {
                    style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    style
                }
            } else {
                Style::default().fg(GRAY_500)
            };
            line.push_hit(Span::styled(label, style), FormHit::Priority(priority));
        }

        let meta_line = line.finish(&mut self.hits);
        f.render_widget(Paragraph::new(meta_line), row);

        if due_active && !self.due.is_empty() && !self.is_submitting() {
            // " ◷ " prefix precedes the raw buffer
            let prefix = u16::try_from(format!(" {} ", self.icons.due_date()).width()).unwrap_or(0);
            let cursor_x = row.x + prefix + u16::try_from(self.due.cursor_width()).unwrap_or(0);
            f.set_cursor_position(Position::new(cursor_x.min(row.x + row.width), row.y));
        }
    }

    /// Draw the category dropdown on top of everything else.
    /// Call after the rest of the frame has been rendered.
    pub fn render_overlay(&mut self, f: &mut Frame, bounds: Rect) {
        let Some(anchor) = self.category_anchor.filter(|_| self.dropdown_open) else {
            return;
        };

        let height = u16::try_from(Category::ALL.len()).unwrap_or(6) + 2;
        let popup = LayoutManager::dropdown_rect(anchor, bounds, DROPDOWN_WIDTH, height);

        let check = self.icons.icons().check.check;
        let items: Vec<ListItem> = Category::ALL
            .iter()
            .map(|category| {
                let marker = if *category == self.category { check } else { " " };
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {} ", self.icons.category(*category))),
                    Span::raw(category.label()),
                    Span::styled(format!(" {}", marker), Style::default().fg(BLUE_600)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SLATE_500))
                    .title(LABEL_SELECT_CATEGORY),
            )
            .highlight_style(Style::default().bg(SLATE_600).add_modifier(Modifier::BOLD));
        let mut state = ListState::default().with_selected(Some(self.dropdown_cursor));

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut state);

        let inner = popup.inner(Margin::new(1, 1));
        for (offset, category) in Category::ALL.iter().enumerate() {
            let y = inner.y + u16::try_from(offset).unwrap_or(0);
            if y < inner.y + inner.height {
                self.hits.push(Rect::new(inner.x, y, inner.width, 1), FormHit::CategoryOption(*category));
            }
        }

        self.dismiss.set_regions([popup, anchor]);
    }
}

impl Component for TaskEntryForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_submitting() {
            return Action::None;
        }

        if self.dropdown_open {
            return self.handle_dropdown_key(key);
        }

        match key.code {
            KeyCode::Tab => {
                self.field = self.field.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.field = self.field.previous();
                Action::None
            }
            KeyCode::Esc => Action::SetFocus(Focus::List),
            KeyCode::Enter => self.submit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => self.handle_field_key(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            if self.dismiss.should_dismiss(&mouse) {
                self.close_dropdown();
            }
            return Action::None;
        }

        if self.dismiss.should_dismiss(&mouse) {
            self.close_dropdown();
        }

        if self.is_submitting() {
            return Action::None;
        }

        match self.hits.hit(mouse.column, mouse.row) {
            // Options are only live while the dropdown is showing
            Some(FormHit::CategoryOption(_)) if !self.dropdown_open => Action::None,
            Some(hit) => self.handle_hit(hit),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::DelayElapsed {
                target: DelayTarget::EntryForm,
                token,
            } => self.finish_submit(token),
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.hits.clear();
        self.category_anchor = None;

        let border_color = if self.focused { BLUE_600 } else { SLATE_500 };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_input_row(f, Rect::new(inner.x, inner.y, inner.width, 1));

        if self.is_expanded() && inner.height > 1 {
            self.render_meta_row(f, Rect::new(inner.x, inner.y + 1, inner.width, 1));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.expand();
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.close_dropdown();
    }
}
