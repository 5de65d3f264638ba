//! Static branding footer

use crate::clock::SharedClock;
use crate::constants::{BRAND_AUTHOR, BRAND_NAME, COPYRIGHT_HOLDER, FOOTER_LINKS};
use crate::icons::IconService;
use crate::ui::core::{Action, AppContext, Component};
use crate::utils::color::{INDIGO_400, ROSE_500, SLATE_400, SLATE_500};
use crate::utils::datetime::current_year;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct Footer {
    clock: SharedClock,
    icons: IconService,
}

impl Footer {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            clock: ctx.clock.clone(),
            icons: ctx.icons.clone(),
        }
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn year(&self) -> i32 {
        current_year(self.clock.now())
    }

    pub fn credit_line(&self) -> String {
        format!("Crafted with {} by {}", self.icons.icons().meta.heart, BRAND_AUTHOR)
    }

    pub fn copyright_line(&self) -> String {
        format!("© {} {} All rights reserved.", self.year(), COPYRIGHT_HOLDER)
    }

    fn brand_line(&self) -> Line<'static> {
        let meta = self.icons.icons().meta;
        let credit = self.credit_line();
        let (before, after) = credit.split_once(meta.heart).unwrap_or((credit.as_str(), ""));

        Line::from(vec![
            Span::styled(
                format!("{} {}", meta.brand, BRAND_NAME),
                Style::default().fg(INDIGO_400).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(SLATE_500)),
            Span::styled(before.to_string(), Style::default().fg(SLATE_400)),
            Span::styled(meta.heart, Style::default().fg(ROSE_500)),
            Span::styled(after.to_string(), Style::default().fg(SLATE_400)),
        ])
    }

    fn links_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, link) in FOOTER_LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*link, Style::default().fg(SLATE_400).add_modifier(Modifier::UNDERLINED)));
        }
        spans.push(Span::styled("   ", Style::default()));
        spans.push(Span::styled(self.copyright_line(), Style::default().fg(SLATE_500)));
        Line::from(spans)
    }
}

impl Component for Footer {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let footer = Paragraph::new(vec![self.brand_line(), self.links_line()])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(SLATE_500)),
            );
        f.render_widget(footer, rect);
    }
}
