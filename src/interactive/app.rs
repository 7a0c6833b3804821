//! TUI application state and logic

use crate::config::Language;
use crate::core::WORD_LENGTH;
use crate::session::{GameSession, GameStatus};
use crate::solver::LocalSolver;
use crate::stats::{StatsStore, StatsSummary};
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

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<S: StatsStore> {
    pub session: GameSession,
    pub solver: LocalSolver,
    pub store: S,
    pub language: Language,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub summary: StatsSummary,
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

impl<S: StatsStore> App<S> {
    #[must_use]
    pub fn new(solver: LocalSolver, store: S, language: Language, max_attempts: usize) -> Self {
        let mut app = Self {
            session: GameSession::new(max_attempts),
            solver,
            store,
            language,
            input_buffer: String::new(),
            messages: Vec::new(),
            summary: StatsSummary::default(),
            should_quit: false,
        };
        app.refresh_summary();
        app.add_message(
            &format!("Welcome! Guess the word in {max_attempts} tries."),
            MessageStyle::Info,
        );
        app.add_message(
            "Ctrl-U undo | Ctrl-N new game | Esc quit",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char(c) if !ctrl => self.type_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    fn type_letter(&mut self, c: char) {
        if self.session.status().is_over() {
            return;
        }
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        if self.session.status().is_over() {
            self.add_message("Game over! Press Ctrl-N for a new game.", MessageStyle::Info);
            return;
        }
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message(
                &format!("Word must be exactly {WORD_LENGTH} letters!"),
                MessageStyle::Error,
            );
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        let submitted = self.session.submit(&input, &mut self.solver).map(|_| ());
        match submitted {
            Ok(()) => self.after_submit(),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_buffer = input;
            }
        }
    }

    fn after_submit(&mut self) {
        match self.session.status() {
            GameStatus::InProgress => {
                let remaining = self.session.remaining();
                self.add_message(
                    &format!("{remaining} guesses left"),
                    MessageStyle::Info,
                );
            }
            GameStatus::Won => {
                let celebration = match self.session.attempts() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.save_record();
            }
            GameStatus::Lost => {
                let secret = self
                    .session
                    .secret()
                    .map_or_else(String::new, |s| s.text().to_uppercase());
                self.add_message(
                    &format!("Out of guesses! The word was {secret}"),
                    MessageStyle::Error,
                );
                self.save_record();
            }
        }
    }

    fn save_record(&mut self) {
        let Some(record) = self.session.record(self.language) else {
            return;
        };
        if let Err(err) = self.store.append(record) {
            tracing::warn!(%err, "could not save game record");
            self.add_message("Could not save statistics", MessageStyle::Error);
        }
        self.refresh_summary();
        self.add_message("Press Ctrl-N for a new game.", MessageStyle::Info);
    }

    fn refresh_summary(&mut self) {
        match self.store.load() {
            Ok(records) => self.summary = StatsSummary::from_records(&records),
            Err(err) => tracing::warn!(%err, "could not load statistics"),
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if self.session.status().is_over() {
            self.add_message("Game over! Press Ctrl-N for a new game.", MessageStyle::Info);
        } else if self.session.undo().is_some() {
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
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
pub fn run_tui<S: StatsStore>(app: App<S>) -> Result<()> {
    // Setup terminal
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

    res
}

fn run_app<B: ratatui::backend::Backend, S: StatsStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
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
