//! # trivia-night
//!
//! Ten-question multiple-choice trivia rounds in the terminal, with questions
//! from the Open Trivia Database and scores kept on disk.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use trivia_night::{Config, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = Config::parse();
//!     trivia_night::run(config).await
//! }
//! ```

mod app;
mod config;
mod data;
pub mod logging;
mod models;
mod quiz;
mod storage;
pub mod terminal;
mod ui;

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self as term, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

pub use app::{App, Effect, Event, BLANK_NAME_ALERT, USERNAME_COOKIE};
pub use config::Config;
pub use data::{parse_response, FetchError, OpenTdbSource, QuestionSource, BATCH_SIZE};
pub use models::{Focus, PlayerState, Question, ScoreEntry};
pub use quiz::{
    group_name, render, sanitize, score, AnswerKey, QuestionSheet, RenderedOption,
    RenderedQuestion, Selections, MAX_SCORED_QUESTIONS, OPTIONS_PER_QUESTION,
};
pub use storage::{
    CookieJar, FileStorage, MemoryStorage, ScoreLedger, Storage, StorageError,
    DEFAULT_COOKIE_DAYS, MAX_COOKIE_DAYS, SCORES_KEY,
};

use terminal::{AppTerminal, TerminalGuard};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Errors that stop the quiz.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to open storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to set up question source: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

/// Open the on-disk stores, take over the terminal and play until the user
/// quits.
pub async fn run(config: Config) -> Result<(), QuizError> {
    let cookies = FileStorage::open(config.cookie_path())?;
    let storage = FileStorage::open(config.storage_path())?;
    let source = OpenTdbSource::new(config.api_url.as_str())?;
    tracing::info!(
        "Starting with data in {} and questions from {}",
        config.data_dir.display(),
        source.api_url()
    );

    let mut session = Session::new(App::new(cookies, storage), source);
    session.start();

    let mut guard = TerminalGuard::enter()?;
    session.run(guard.terminal()).await
}

/// Drives an [`App`]: turns keys into events, carries out effects and keeps
/// the alert queue.
pub struct Session<C, L, S> {
    app: App<C, L>,
    source: Arc<S>,
    alerts: VecDeque<String>,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl<C, L, S> Session<C, L, S>
where
    C: Storage,
    L: Storage,
    S: QuestionSource + 'static,
{
    pub fn new(app: App<C, L>, source: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app,
            source: Arc::new(source),
            alerts: VecDeque::new(),
            tx,
            rx,
        }
    }

    pub fn app(&self) -> &App<C, L> {
        &self.app
    }

    /// The alert currently shown, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Fire the page-load event.
    pub fn start(&mut self) {
        self.dispatch(Event::Load);
    }

    pub fn dispatch(&mut self, event: Event) {
        for effect in self.app.handle(event) {
            match effect {
                Effect::Alert(message) => self.alerts.push_back(message),
                Effect::FetchBatch => self.spawn_fetch(),
            }
        }
    }

    fn spawn_fetch(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tracing::info!("Fetching {} questions", BATCH_SIZE);

        tokio::spawn(async move {
            let result = source.fetch_batch().await;
            let _ = tx.send(Event::BatchLoaded(result));
        });
    }

    /// Apply every fetch result that has already arrived.
    pub fn drain_completed(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
        }
    }

    /// Wait for the next fetch result and apply it.
    pub async fn wait_for_batch(&mut self) {
        if let Some(event) = self.rx.recv().await {
            self.dispatch(event);
        }
    }

    async fn run(&mut self, terminal: &mut AppTerminal) -> Result<(), QuizError> {
        loop {
            self.drain_completed();
            terminal.draw(|frame| ui::render(frame, &self.app, self.alert()))?;

            if term::poll(INPUT_POLL)? {
                if let term::Event::Key(key) = term::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    if self.handle_key(key) {
                        break;
                    }
                }
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Returns true if the session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => true,
                KeyCode::Char('n') if self.alerts.is_empty() => {
                    self.new_player();
                    false
                }
                _ => false,
            };
        }

        if !self.alerts.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alerts.pop_front();
            }
            return false;
        }

        match self.app.focus() {
            Focus::Name => self.handle_name_key(key.code),
            Focus::Questions => self.handle_question_key(key.code),
        }
    }

    fn handle_name_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.app.toggle_focus(),
            KeyCode::Enter => self.dispatch(Event::Submit),
            KeyCode::Backspace => self.app.name_input_pop(),
            KeyCode::Char(c) => self.app.name_input_push(c),
            _ => {}
        }
        false
    }

    fn handle_question_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.app.toggle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.app.select_next_question(),
            KeyCode::Up | KeyCode::Char('k') => self.app.select_previous_question(),
            KeyCode::Char(c @ '1'..='4') => {
                self.app.check_option(c as usize - '1' as usize);
            }
            KeyCode::Char(' ') => self.app.cycle_option(),
            KeyCode::Enter => self.dispatch(Event::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') => self.new_player(),
            _ => {}
        }
        false
    }

    fn new_player(&mut self) {
        if self.app.new_player_visible() {
            self.dispatch(Event::NewPlayer);
        }
    }
}
