//! TUI application state and logic

use crate::core::ValidationOutcome;
use crate::dictionary::SpellChecker;
use crate::game::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D> {
    pub session: GameSession<D>,
    pub candidates: Vec<String>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    /// A rejection alert is showing and must be dismissed
    Alert,
}

/// Rejection shown as a modal popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals for this run of the program
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
}

impl<D: SpellChecker> App<D> {
    /// Create the app and start the first round
    #[must_use]
    pub fn new(mut session: GameSession<D>, candidates: Vec<String>) -> Self {
        session.start_new_round(&candidates);

        Self {
            session,
            candidates,
            input_mode: InputMode::Typing,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Welcome! Find words hidden in the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                rounds_played: 1,
                words_found: 0,
            },
            should_quit: false,
        }
    }

    /// Submit whatever is in the input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_word(&input) {
            None => {}
            Some(ValidationOutcome::Accepted) => {
                self.stats.words_found += 1;
                let word = self.session.accepted_words().first().cloned().unwrap_or_default();
                self.add_message(&format!("Found '{word}'"), MessageStyle::Success);
            }
            Some(ValidationOutcome::Rejected(reason)) => {
                let root = self.session.root_word().text().to_string();
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(&root),
                });
                self.input_mode = InputMode::Alert;
                self.add_message(reason.title(), MessageStyle::Error);
            }
        }
    }

    /// Start a new round, keeping the running statistics
    pub fn new_round(&mut self) {
        let found = self.session.len();
        self.session.start_new_round(&self.candidates);
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.dismiss_alert();

        let root = self.session.root_word().text().to_uppercase();
        self.add_message(
            &format!("New round: {root} (last round: {found} found)"),
            MessageStyle::Info,
        );
    }

    /// Close the alert popup and go back to typing
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    /// Append to the message log, keeping the last five
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if !c.is_control() => {
                    // Never autocapitalize
                    self.input_buffer.extend(c.to_lowercase());
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: SpellChecker>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: SpellChecker>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        rounds = app.stats.rounds_played,
        words = app.stats.words_found,
        "game finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Language, WordSet};

    fn app() -> App<WordSet> {
        let dict = WordSet::from_words(Language::default(), ["grade", "grand"]);
        App::new(GameSession::new(dict), vec!["garden".to_string()])
    }

    fn press(app: &mut App<WordSet>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<WordSet>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_first_round() {
        let app = app();
        assert_eq!(app.session.root_word().text(), "garden");
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.stats.rounds_played, 1);
    }

    #[test]
    fn typing_is_lowercased() {
        let mut app = app();
        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('R'));
        assert_eq!(app.input_buffer, "gr");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "g");
    }

    #[test]
    fn accepted_word_is_listed() {
        let mut app = app();
        type_word(&mut app, "grade");
        assert_eq!(app.session.accepted_words(), ["grade"]);
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.stats.words_found, 1);
    }

    #[test]
    fn found_message_uses_the_stored_word() {
        let mut app = app();
        app.input_buffer = "  GRADE ".to_string();
        app.submit();

        assert_eq!(app.session.accepted_words(), ["grade"]);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Found 'grade'");
    }

    #[test]
    fn rejection_shows_alert_until_dismissed() {
        let mut app = app();
        type_word(&mut app, "ragged");

        assert_eq!(app.input_mode, InputMode::Alert);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not in dictionary");
        assert!(alert.message.contains("garden"));

        // Letters are ignored while the alert is up
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());
        assert!(app.session.is_empty());
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert!(app.session.is_empty());
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let mut app = app();
        type_word(&mut app, "grade");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.session.is_empty());
        assert_eq!(app.stats.rounds_played, 2);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
