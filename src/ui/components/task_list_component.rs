use crate::constants::{EMPTY_LIST, ITEM_HEIGHT};
use crate::icons::IconService;
use crate::task::{Task, TaskId};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::task_list_item_component::TaskListItemComponent;
use crate::ui::core::{Action, AppContext, Component, DelayTarget, Focus};
use crate::utils::color::{BLUE_600, INDIGO_400, SLATE_500};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::HashSet;

pub struct TaskListComponent {
    items: Vec<TaskListItemComponent>,
    cursor: usize,
    selection_mode: bool,
    focused: bool,
    scrollbar: ScrollbarHelper,
    /// Where each visible item was drawn, by index into `items`
    item_rects: Vec<(usize, Rect)>,
    ctx: AppContext,
}

impl TaskListComponent {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            selection_mode: false,
            focused: false,
            scrollbar: ScrollbarHelper::new(),
            item_rects: Vec::new(),
            ctx: ctx.clone(),
        }
    }

    /// Mirror the parent's task collection. Items are matched by id so an
    /// in-progress edit survives unrelated changes.
    pub fn set_tasks(&mut self, tasks: &[Task], selected: &HashSet<TaskId>) {
        let cursor_id = self.items.get(self.cursor).map(|item| item.id().clone());
        let mut previous: Vec<TaskListItemComponent> = std::mem::take(&mut self.items);

        for task in tasks {
            let item = match previous.iter().position(|item| *item.id() == task.id) {
                Some(index) => {
                    let mut item = previous.swap_remove(index);
                    item.set_task(task.clone());
                    item
                }
                None => TaskListItemComponent::new(task.clone(), &self.ctx),
            };
            self.items.push(item);
        }

        for item in &mut self.items {
            item.set_selection_mode(self.selection_mode);
            let is_selected = selected.contains(item.id());
            item.set_selected(is_selected);
        }

        // Keep the cursor on the same task when it survived
        if let Some(index) = cursor_id.and_then(|id| self.items.iter().position(|item| *item.id() == id)) {
            self.cursor = index;
        }
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
        self.sync_focus();
    }

    pub fn items(&self) -> &[TaskListItemComponent] {
        &self.items
    }

    pub fn item(&self, id: &TaskId) -> Option<&TaskListItemComponent> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.items.get(self.cursor).map(TaskListItemComponent::task)
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn set_selection_mode(&mut self, selection_mode: bool) {
        self.selection_mode = selection_mode;
        for item in &mut self.items {
            item.set_selection_mode(selection_mode);
        }
    }

    /// True while the item under the cursor owns the keyboard
    pub fn is_editing(&self) -> bool {
        self.items.get(self.cursor).is_some_and(TaskListItemComponent::is_editing)
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.ctx.icons = icons.clone();
        for item in &mut self.items {
            item.set_icons(icons.clone());
        }
    }

    fn sync_focus(&mut self) {
        let focused = self.focused;
        let cursor = self.cursor;
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_focused(focused && index == cursor);
        }
    }

    pub fn next_task(&mut self) {
        if !self.items.is_empty() && self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            self.sync_focus();
        }
    }

    pub fn previous_task(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.sync_focus();
        }
    }

    fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.item_rects
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }

    fn forward_to_cursor(&mut self, key: KeyEvent) -> Action {
        match self.items.get_mut(self.cursor) {
            Some(item) => item.handle_key_events(key),
            None => Action::None,
        }
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" Tasks ({}) ", self.items.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.selection_mode {
            let selected = self.items.iter().filter(|item| item.is_selected()).count();
            spans.push(Span::styled(
                format!("[selecting: {}] ", selected),
                Style::default().fg(INDIGO_400),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_editing() {
            return self.forward_to_cursor(key);
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_task();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_task();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                self.sync_focus();
                Action::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.items.len().saturating_sub(1);
                self.sync_focus();
                Action::None
            }
            KeyCode::Char('v') => Action::ToggleSelectionMode,
            KeyCode::Esc if self.selection_mode => Action::ToggleSelectionMode,
            KeyCode::Char('c') if self.selection_mode => Action::CompleteSelected,
            KeyCode::Char('x') if self.selection_mode => Action::DeleteSelected,
            KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => Action::SetFocus(Focus::Form),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('q') => Action::Quit,
            _ => self.forward_to_cursor(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Moved => {
                let hovered = self.item_at(mouse.column, mouse.row);
                for (index, item) in self.items.iter_mut().enumerate() {
                    item.set_hovered(Some(index) == hovered);
                }
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.next_task();
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.previous_task();
                Action::None
            }
            MouseEventKind::Down(_) => match self.item_at(mouse.column, mouse.row) {
                Some(index) => {
                    // Clicking elsewhere abandons an edit in progress
                    if index != self.cursor {
                        if let Some(item) = self.items.get_mut(self.cursor) {
                            item.cancel_edit();
                        }
                    }
                    self.cursor = index;
                    self.sync_focus();
                    self.items[index].handle_mouse_events(mouse)
                }
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
            } => match self.items.iter_mut().find(|item| *item.id() == id) {
                Some(item) => item.update(Action::DelayElapsed {
                    target: DelayTarget::Item(id),
                    token,
                }),
                None => {
                    log::debug!("Dropping delay for missing task {}", id);
                    Action::None
                }
            },
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { BLUE_600 } else { SLATE_500 };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(self.title());
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.item_rects.clear();

        if self.items.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST)
                .alignment(Alignment::Center)
                .style(Style::default().fg(SLATE_500));
            f.render_widget(empty, inner);
            return;
        }

        let (content, scrollbar_area) = ScrollbarHelper::calculate_areas(inner, self.items.len(), ITEM_HEIGHT);
        let visible = ScrollbarHelper::visible_items(content.height, ITEM_HEIGHT);
        self.scrollbar.follow(self.items.len(), self.cursor, visible);

        let offset = self.scrollbar.offset();
        for (slot, index) in (offset..self.items.len()).take(visible).enumerate() {
            let y = content.y + u16::try_from(slot).unwrap_or(0) * ITEM_HEIGHT;
            let item_rect = Rect::new(content.x, y, content.width, ITEM_HEIGHT);
            self.items[index].render(f, item_rect);
            self.item_rects.push((index, item_rect));
        }

        self.scrollbar.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.sync_focus();
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.sync_focus();
    }
}
