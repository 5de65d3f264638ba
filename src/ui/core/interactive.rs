use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
};

/// Clickable region recorded during render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveArea<T> {
    pub rect: Rect,
    pub target: T,
}

/// Hit regions for one component, rebuilt on every render.
/// Later registrations win when regions overlap.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    areas: Vec<InteractiveArea<T>>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self { areas: Vec::new() }
    }
}

impl<T: Clone> HitMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn push(&mut self, rect: Rect, target: T) {
        if rect.area() > 0 {
            self.areas.push(InteractiveArea { rect, target });
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<T> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|area| area.rect.contains(position))
            .map(|area| area.target.clone())
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.areas.iter().map(|area| area.rect)
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Builds one row of spans left to right while recording which columns
/// belong to which target
#[derive(Debug)]
pub struct HitLine<'a, T> {
    area: Rect,
    x: u16,
    spans: Vec<Span<'a>>,
    areas: Vec<InteractiveArea<T>>,
}

impl<'a, T: Clone> HitLine<'a, T> {
    /// `area` is the row being built; only its first line is used
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            x: area.x,
            spans: Vec::new(),
            areas: Vec::new(),
        }
    }

    fn advance(&mut self, span: &Span<'a>) -> Rect {
        let right = self.area.x.saturating_add(self.area.width);
        let start = self.x.min(right);
        let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
        self.x = self.x.saturating_add(width);
        Rect::new(start, self.area.y, self.x.min(right) - start, 1)
    }

    pub fn push(&mut self, span: Span<'a>) {
        self.advance(&span);
        self.spans.push(span);
    }

    pub fn push_hit(&mut self, span: Span<'a>, target: T) -> Rect {
        let rect = self.advance(&span);
        self.spans.push(span);
        self.areas.push(InteractiveArea { rect, target });
        rect
    }

    /// Pad with spaces up to `column` (relative to the row start)
    pub fn pad_to(&mut self, column: u16) {
        let target = self.area.x.saturating_add(column);
        if target > self.x {
            self.push(Span::raw(" ".repeat(usize::from(target - self.x))));
        }
    }

    /// Columns used so far
    pub fn width(&self) -> u16 {
        self.x - self.area.x
    }

    pub fn finish(self, hits: &mut HitMap<T>) -> Line<'a> {
        for area in self.areas {
            hits.push(area.rect, area.target);
        }
        Line::from(self.spans)
    }
}
