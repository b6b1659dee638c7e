// TUI module - Terminal User Interface
//
// Terminal setup and teardown plus the event loop. The pipeline itself is
// synchronous and the only event source is the keyboard, so the loop is a
// plain poll-and-draw cycle: block briefly on crossterm, apply keystrokes
// in arrival order, redraw.

pub mod app;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How long to block on the keyboard before redrawing anyway
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI form
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, including on error.
pub fn run(config: &Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);
    tracing::info!("amount form ready");

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: draw, wait for a key, hand it to the app.
///
/// Keystrokes are applied strictly in the order crossterm delivers them;
/// the caret remap depends on the text the previous keystroke produced.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(POLL_INTERVAL).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
