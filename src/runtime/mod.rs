//! Runtime: settings and logging bootstrap, terminal setup and the event
//! loop driving the dashboard.

use std::sync::mpsc;
use std::time::Duration;
use std::{env, fs};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::config;
use crate::medialist::Notification;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    init_logging(&settings.log)?;

    let layout_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "dashboard.html".to_string());
    let markup = match fs::read_to_string(&layout_path) {
        Ok(m) => m,
        Err(e) => {
            warn!(path = %layout_path, error = %e, "layout not readable, starting empty");
            String::new()
        }
    };

    let (events_tx, events_rx) = mpsc::channel::<Notification>();
    let mut refresh = Duration::from_millis(settings.ui.refresh_delay_ms);

    let mut app = App::new(settings.ui.event_log_capacity);
    startup::connect_declared(&mut app, &markup, &settings, &events_tx, &mut refresh);
    info!(
        lists = app.lists.len(),
        content = app.content.is_some(),
        "dashboard connected"
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &events_tx,
        &events_rx,
        &mut refresh,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// Logs go to a file; stderr belongs to the TUI while raw mode is active.
fn init_logging(log: &config::LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(&log.file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
