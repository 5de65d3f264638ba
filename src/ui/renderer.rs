//! Terminal setup and the main event loop

use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the TUI until the user quits
pub async fn run_app(ctx: AppContext) -> Result<()> {
    let mouse_enabled = ctx.config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(ctx);
    let mut event_handler = EventHandler::new();
    log::info!("Event loop started (mouse: {})", mouse_enabled);

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Event loop stopped");
    result
}

/// Decides whether a tick, with no input behind it, changes what is on screen
#[derive(Debug, Default)]
pub struct TickRedraw {
    toast_shown: bool,
}

impl TickRedraw {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember what the frame just drawn contained
    pub fn frame_drawn(&mut self, app: &AppComponent) {
        self.toast_shown = app.status_bar().current_toast().is_some();
    }

    /// Spinners animate while delays run; a toast appearing or expiring
    /// needs exactly one more frame
    pub fn needs_redraw(&self, app: &AppComponent, delivered: usize) -> bool {
        let toast_visible = app.status_bar().current_toast().is_some();
        delivered > 0 || app.pending_delays() > 0 || toast_visible != self.toast_shown
    }
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;
    let mut redraw = TickRedraw::new();

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            redraw.frame_drawn(app);
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {
                let delivered = app.process_background_actions();
                needs_render = redraw.needs_redraw(app, delivered);
            }
            EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
