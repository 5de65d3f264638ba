use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Tracks the screen regions that make up an open popup so a press anywhere
/// else can close it. Presses inside any registered region are ignored.
#[derive(Debug, Default, Clone)]
pub struct OutsideDismiss {
    regions: Vec<Rect>,
    armed: bool,
}

impl OutsideDismiss {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening; regions from a previous opening are discarded
    pub fn arm(&mut self) {
        self.armed = true;
        self.regions.clear();
    }

    /// Stop listening. Safe to call when already disarmed.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.regions.clear();
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Regions are re-registered on every render
    pub fn set_regions(&mut self, regions: impl IntoIterator<Item = Rect>) {
        self.regions = regions.into_iter().filter(|r| r.area() > 0).collect();
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.regions.iter().any(|r| r.contains(position))
    }

    /// True when `mouse` is a press outside every region while armed
    pub fn should_dismiss(&self, mouse: &MouseEvent) -> bool {
        if !self.armed {
            return false;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left | MouseButton::Right | MouseButton::Middle) => {
                !self.contains(mouse.column, mouse.row)
            }
            _ => false,
        }
    }
}
