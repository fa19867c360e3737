use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config::Settings;
use crate::content::ContentLoader;
use crate::medialist::Notification;
use crate::runtime::startup;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self { pending_gg: false }
    }
}

/// Main terminal event loop: drives in-flight fragment fetches, drains
/// widget notifications, draws the UI and handles input. Returns `Ok(())`
/// when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    events_tx: &Sender<Notification>,
    events_rx: &Receiver<Notification>,
    refresh: &mut Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::new();

    loop {
        // Drive any in-flight fragment fetch; widgets declared inside the
        // inserted markup are connected the same way layout widgets were.
        let inserted = app.content.as_mut().and_then(ContentLoader::poll);
        if let Some(markup) = inserted {
            startup::connect_declared(app, &markup, settings, events_tx, refresh);
        }

        while let Ok(notification) = events_rx.try_recv() {
            app.record_event(notification);
        }

        // Scroll-into-view: a fresh current marker on the focused list
        // pulls the hover cursor to it so the window follows.
        let focused = app.focused;
        let mut jump: Option<usize> = None;
        for (i, list) in app.lists.iter_mut().enumerate() {
            if let Some(index) = list.take_scroll_to() {
                if i == focused {
                    jump = Some(index);
                }
            }
        }
        if let Some(index) = jump {
            app.hover = index;
        }

        // Keep the hover cursor valid when a list re-render shrank it.
        let len = app.focused_list().map(|l| l.entries().len()).unwrap_or(0);
        if len == 0 {
            app.hover = 0;
        } else if app.hover >= len {
            app.hover = len - 1;
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(*refresh)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, &mut state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle one key press. Returns `true` when the loop should exit.
fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            return true;
        }
        KeyCode::Tab => {
            state.pending_gg = false;
            app.cycle_focus();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.hover_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.hover_prev();
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.hover_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.hover_bottom();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            app.click_hovered();
        }
        _ => {
            state.pending_gg = false;
        }
    }
    false
}
