//! TUI application state and logic

use crate::core::{CellEvents, DraftRow, WORD_LENGTH};
use crate::engine::{EngineState, Session};
use crate::error::EngineError;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub draft: DraftRow,
    pub cursor: usize,
    /// Suggestions shown per list when collapsed
    pub top: usize,
    pub expanded: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_solved: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, top: usize) -> Self {
        let mut app = Self {
            session: Session::new(dictionary),
            draft: DraftRow::new(),
            cursor: 0,
            top,
            expanded: false,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Type your guess, then Space to colour each letter and Enter to submit.",
            MessageStyle::Info,
        );
        app
    }

    /// How many suggestions each list shows right now
    #[must_use]
    pub const fn visible_suggestions(&self) -> usize {
        if self.expanded {
            crate::output::display::EXPANDED_SUGGESTIONS
        } else {
            self.top
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('z') if ctrl => self.undo_last(),
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Tab => self.expanded = !self.expanded,
            KeyCode::Char(' ') | KeyCode::Up => self.draft.on_cell_status_cycled(self.cursor),
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.erase(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn type_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            self.add_message("Only letters a-z are accepted", MessageStyle::Error);
            return;
        }
        self.draft.on_cell_edited(self.cursor, Some(c));
        self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1);
    }

    fn erase(&mut self) {
        if self.draft.cells()[self.cursor].letter().is_none() {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.draft.on_cell_edited(self.cursor, None);
    }

    pub fn submit(&mut self) {
        match self.session.submit_row(self.draft.cells()) {
            Ok(EngineState::Solved) => {
                let attempts = self.session.history().len();
                self.stats.games_solved += 1;
                if attempts < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[attempts] += 1;
                }
                self.reset_draft();
                self.add_message(
                    &format!(
                        "🎉 Solved in {attempts} {}! Ctrl-N for a new game.",
                        if attempts == 1 { "attempt" } else { "attempts" }
                    ),
                    MessageStyle::Success,
                );
            }
            Ok(EngineState::Exhausted) => {
                self.reset_draft();
                self.add_message(
                    "No candidates remain - feedback may be incorrect. Ctrl-Z to undo.",
                    MessageStyle::Error,
                );
            }
            Ok(EngineState::Collecting) => {
                self.reset_draft();
                let remaining = self.session.candidates().len();
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
            }
            Err(EngineError::IncompleteRow { position }) => {
                self.cursor = position;
                self.add_message("Please complete all letters!", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn reset_draft(&mut self) {
        self.draft.clear();
        self.cursor = 0;
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.reset_draft();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        match self.session.undo() {
            Some(row) => {
                self.add_message(&format!("Undone {}", row.word()), MessageStyle::Info);
            }
            None => self.add_message("Nothing to undo!", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
