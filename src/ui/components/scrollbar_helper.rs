//! Scrollbar and viewport bookkeeping for the task list.
//!
//! Items are a fixed number of rows tall, so scrolling is tracked in whole
//! items: `offset` is the first visible item.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::utils::color::SLATE_600;

pub struct ScrollbarHelper {
    state: ScrollbarState,
    offset: usize,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
            offset: 0,
        }
    }

    /// First visible item
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of whole items that fit in `height` rows
    pub fn visible_items(height: u16, item_height: u16) -> usize {
        usize::from(height / item_height.max(1))
    }

    pub fn needs_scrollbar(total_items: usize, visible_items: usize) -> bool {
        total_items > visible_items
    }

    /// Scroll just enough to keep `cursor` on screen and sync the scrollbar
    pub fn follow(&mut self, total_items: usize, cursor: usize, visible_items: usize) {
        if visible_items == 0 || total_items == 0 {
            self.offset = 0;
        } else {
            let max_offset = total_items.saturating_sub(visible_items);
            if cursor < self.offset {
                self.offset = cursor;
            } else if cursor >= self.offset + visible_items {
                self.offset = cursor + 1 - visible_items;
            }
            self.offset = self.offset.min(max_offset);
        }

        self.state = self
            .state
            .content_length(total_items.saturating_sub(visible_items) + 1)
            .viewport_content_length(visible_items)
            .position(self.offset);
    }

    /// Split `rect` into the content area and, when needed, a one-column scrollbar
    pub fn calculate_areas(rect: Rect, total_items: usize, item_height: u16) -> (Rect, Option<Rect>) {
        let visible = Self::visible_items(rect.height, item_height);

        if Self::needs_scrollbar(total_items, visible) && rect.width > 1 {
            let content_area = Rect {
                width: rect.width - 1,
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width - 1,
                width: 1,
                ..rect
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_symbol(Some("│"))
                .thumb_symbol("┃")
                .style(Style::default().fg(SLATE_600));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
