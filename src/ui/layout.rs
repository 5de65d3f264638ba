//! Layout management and calculations

use crate::constants::MIN_CONTENT_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the footer
pub const FOOTER_HEIGHT: u16 = 3;

/// Screen areas of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub form: Rect,
    pub list: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Centre a column no wider than `max_width` inside `area`
    #[must_use]
    pub fn content_column(area: Rect, max_width: u16) -> Rect {
        let width = area.width.min(max_width.max(MIN_CONTENT_WIDTH));
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Split the content column into form, list, status bar and footer
    #[must_use]
    pub fn main_layout(column: Rect, form_height: u16) -> AppLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(form_height),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(column);

        AppLayout {
            form: chunks[0],
            list: chunks[1],
            status: chunks[2],
            footer: chunks[3],
        }
    }

    /// Place a popup of `width` x `height` just below `anchor`, kept inside `bounds`.
    /// Flips above the anchor when there is no room below.
    #[must_use]
    pub fn dropdown_rect(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let max_x = bounds.x + bounds.width - width;
        let x = anchor.x.clamp(bounds.x, max_x);

        let below = anchor.y.saturating_add(anchor.height);
        let bottom = bounds.y + bounds.height;
        let y = if below.saturating_add(height) <= bottom {
            below
        } else if anchor.y >= bounds.y + height {
            anchor.y - height
        } else {
            bottom - height
        };

        Rect::new(x, y, width, height)
    }
}
