//! TUI application state and logic

use crate::game::{GameController, KeyInput, Notification, PendingSubmission, Phase, Step};
use crate::output::formatters::guesses_label;
use crate::services::{ServiceError, WordOracle, WordSource};
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
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// How long to wait for a key before checking for finished validations
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Validation = (PendingSubmission, Result<bool, ServiceError>);

/// Application state
pub struct App<S, O> {
    pub controller: GameController<S, O>,
    pub messages: Vec<Message>,
    pub show_word: bool,
    pub should_quit: bool,
    validations_tx: UnboundedSender<Validation>,
    validations_rx: UnboundedReceiver<Validation>,
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

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NewGame,
    ToggleWord,
    Input(KeyInput),
    Nothing,
}

impl Action {
    /// Map a terminal key to an action
    ///
    /// Letters always go to the board; once the game is over, Enter starts a
    /// new one and 'q' quits.
    #[must_use]
    pub fn from_key(key: KeyEvent, game_over: bool) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Self::Quit,
            KeyCode::Char('n') if ctrl => Self::NewGame,
            KeyCode::Esc => Self::Quit,
            KeyCode::Tab => Self::ToggleWord,
            KeyCode::Enter if game_over => Self::NewGame,
            KeyCode::Char('q') if game_over => Self::Quit,
            KeyCode::Enter => Self::Input(KeyInput::Submit),
            KeyCode::Backspace | KeyCode::Delete => Self::Input(KeyInput::Delete),
            KeyCode::Char(c) => KeyInput::letter(c).map_or(Self::Nothing, Self::Input),
            _ => Self::Nothing,
        }
    }
}

impl<S, O> App<S, O> {
    #[must_use]
    pub fn new(controller: GameController<S, O>) -> Self {
        let (validations_tx, validations_rx) = mpsc::unbounded_channel();

        Self {
            controller,
            messages: vec![
                Message {
                    text: "Guess the five-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Backspace to delete.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            show_word: false,
            should_quit: false,
            validations_tx,
            validations_rx,
        }
    }

    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.controller.session().phase() == Phase::Validating
    }

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

    fn announce(&mut self, notification: &Notification) {
        let (text, style) = match notification {
            Notification::LetterAdded(_) | Notification::LetterRemoved => return,
            Notification::GuessLengthError { .. } => (
                "Your guess must be exactly 5 letters!".to_string(),
                MessageStyle::Error,
            ),
            Notification::InvalidWordRejected(word) => (
                format!(
                    "{} is not in the word list. Delete your entry and try again.",
                    word.text().to_uppercase()
                ),
                MessageStyle::Error,
            ),
            Notification::GuessScored(_) => ("Try again!".to_string(), MessageStyle::Info),
            Notification::GameWon { attempts } => (
                format!(
                    "🎉 You win in {}! Streak: {}. Enter for a new game.",
                    guesses_label(*attempts),
                    self.controller.streak().current()
                ),
                MessageStyle::Success,
            ),
            Notification::GameLost { target } => (
                format!(
                    "Game over. The word was {}. Enter for a new game.",
                    target.text().to_uppercase()
                ),
                MessageStyle::Error,
            ),
            Notification::SessionReset => ("New game started!".to_string(), MessageStyle::Info),
        };
        self.add_message(&text, style);
    }
}

impl<S, O> App<S, O>
where
    S: WordSource,
    O: WordOracle + Send + Sync + 'static,
{
    pub fn handle_input(&mut self, input: KeyInput) {
        match self.controller.press(input) {
            Step::Notify(notification) => self.announce(&notification),
            Step::Ignored => {}
            Step::Validate(pending) => {
                self.add_message("Checking word...", MessageStyle::Info);
                self.spawn_validation(pending);
            }
        }
    }

    /// Look the guess up on a background task; the answer comes back through
    /// the channel drained by [`App::poll_validations`]
    fn spawn_validation(&self, pending: PendingSubmission) {
        let oracle = self.controller.oracle();
        let validations = self.validations_tx.clone();

        tokio::spawn(async move {
            let lookup = oracle.as_ref().is_valid_word(pending.candidate()).await;
            if validations.send((pending, lookup)).is_err() {
                debug!("app closed before validation finished");
            }
        });
    }

    /// Apply every validation that has finished since the last call
    pub fn poll_validations(&mut self) {
        while let Ok((pending, lookup)) = self.validations_rx.try_recv() {
            if let Some(notification) = self.controller.settle(pending, lookup) {
                self.announce(&notification);
            }
        }
    }

    /// Wait for the next validation result and apply it
    pub async fn next_validation(&mut self) {
        if let Some((pending, lookup)) = self.validations_rx.recv().await
            && let Some(notification) = self.controller.settle(pending, lookup)
        {
            self.announce(&notification);
        }
    }

    pub async fn new_game(&mut self) {
        match self.controller.reset().await {
            Ok(notification) => {
                self.show_word = false;
                self.announce(&notification);
            }
            Err(error) => self.add_message(&error.to_string(), MessageStyle::Error),
        }
    }

    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewGame => self.new_game().await,
            Action::ToggleWord => self.show_word = !self.show_word,
            Action::Input(input) => self.handle_input(input),
            Action::Nothing => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<S, O>(app: App<S, O>) -> Result<()>
where
    S: WordSource,
    O: WordOracle + Send + Sync + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

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

async fn run_app<B, S, O>(terminal: &mut Terminal<B>, mut app: App<S, O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
    O: WordOracle + Send + Sync + 'static,
{
    loop {
        app.poll_validations();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let action = Action::from_key(key, app.controller.session().is_over());
            app.perform(action).await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
