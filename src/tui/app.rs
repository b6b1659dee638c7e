// TUI application state
//
// Holds the amount editor, the last committed amount, and the captured log
// buffer. All keystroke handling funnels into the editor reducer; the app
// only decides which keys are editing keys and which control the app.

use crate::config::Config;
use crate::editor::{EditorState, Keystroke};
use crate::logging::LogBuffer;
use crate::money::formatter::from_number;
use crate::money::Amount;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application state for the TUI
pub struct App {
    /// The amount field: canonical text plus caret
    pub editor: EditorState,

    /// Last committed amount, shown in the status bar
    pub committed: Option<Amount>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the footer panel
    pub log_buffer: LogBuffer,

    /// Currency symbol prefix (display only)
    pub symbol: String,

    /// Placeholder while the field is empty
    pub placeholder: String,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            editor: EditorState::new(),
            committed: None,
            should_quit: false,
            log_buffer,
            symbol: config.symbol.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.commit(),
            _ => {
                if let Some(stroke) = keystroke_for(key.code) {
                    self.editor = self.editor.apply(stroke);
                }
            }
        }
    }

    /// Commit the current amount: in the real form this is the hand-off to
    /// the persistence collaborator, here it is logged and pinned to the
    /// status bar
    fn commit(&mut self) {
        let amount = self.editor.amount();
        tracing::info!(
            "committed {} ({}.{:02}) - {}",
            from_number(amount),
            amount.units(),
            amount.cents_part(),
            self.editor.verbalized(),
        );
        self.committed = Some(amount);
    }
}

/// Map a terminal key to an editor keystroke, if it is an editing key
fn keystroke_for(code: KeyCode) -> Option<Keystroke> {
    match code {
        KeyCode::Char(ch) => Some(Keystroke::Char(ch)),
        KeyCode::Backspace => Some(Keystroke::Backspace),
        KeyCode::Delete => Some(Keystroke::Delete),
        KeyCode::Left => Some(Keystroke::Left),
        KeyCode::Right => Some(Keystroke::Right),
        KeyCode::Home => Some(Keystroke::Home),
        KeyCode::End => Some(Keystroke::End),
        _ => None,
    }
}
