//! Terminal UI for gridtac.

mod app;
mod input;
mod ui;

pub use app::{App, Effect, UiEvent};
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::{board_lines, draw};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(crate::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting gridtac TUI");

    let app = App::from_config(&config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let res = run_app(&mut terminal, app, event_tx, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("gridtac TUI exited");
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Tui,
    mut app: App,
    event_tx: mpsc::UnboundedSender<UiEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            let effects = app.handle_ui_event(event);
            dispatch(effects, &event_tx);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let effects = app.handle_key(key.code);
                    dispatch(effects, &event_tx);
                }
            }
        }
    }
}

/// Spawns a timer task per scheduled event.
fn dispatch(effects: Vec<Effect>, event_tx: &mpsc::UnboundedSender<UiEvent>) {
    for effect in effects {
        let Effect::Schedule { after, event } = effect;
        debug!(?after, ?event, "Scheduling event");
        let tx = event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The loop may have exited; nothing to deliver to then.
            let _ = tx.send(event);
        });
    }
}
