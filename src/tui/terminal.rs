//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.
//! It also hosts the toast event loop.

use anyhow::Result;
use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::ToastSettings;
use crate::toast::{resolve_duration_str, MemorySurface, ToastNotifier};

use super::event::{Event, EventHandler};
use super::widgets::toast::{toast_area, ToastWidget};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How often the loop wakes up to run timers and redraw
const TICK_RATE: Duration = Duration::from_millis(50);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draw every element on the surface, bottom to top
pub fn render(frame: &mut Frame, surface: &MemorySurface) {
    let area = frame.area();
    for element in surface.elements() {
        frame.render_widget(ToastWidget::new(element), toast_area(element, area));
    }
}

/// Show a toast full-screen until it has faded out and been removed
///
/// Pressing `q` or `Esc` leaves early. An unparseable `duration_ms` falls
/// back to the configured default.
pub fn run_toast(settings: &ToastSettings, message: &str, duration_ms: Option<&str>) -> Result<()> {
    let mut toasts = ToastNotifier::new(MemorySurface::new()).with_settings(settings);
    let duration = resolve_duration_str(duration_ms, toasts.default_duration());

    let mut terminal = init_terminal()?;
    toasts.show_for(message, duration);

    let events = EventHandler::new(TICK_RATE);
    let result = event_loop(&mut terminal, &mut toasts, &events);

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Tui,
    toasts: &mut ToastNotifier<MemorySurface>,
    events: &EventHandler,
) -> Result<()> {
    loop {
        toasts.tick();
        if toasts.surface().is_empty() {
            return Ok(());
        }

        terminal.draw(|frame| render(frame, toasts.surface()))?;

        match events.next()? {
            Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                return Ok(());
            }
            Event::Key(_) | Event::Resize(_, _) | Event::Tick => {}
        }
    }
}
