use crate::data::FetchError;
use crate::models::{Focus, PlayerState, Question, ScoreEntry};
use crate::quiz::{self, AnswerKey, QuestionSheet, Selections, OPTIONS_PER_QUESTION};
use crate::storage::{CookieJar, ScoreLedger, Storage, DEFAULT_COOKIE_DAYS};

/// Cookie holding the remembered player name.
pub const USERNAME_COOKIE: &str = "username";

pub const BLANK_NAME_ALERT: &str = "Please enter your name!";

/// Something that happened to the quiz.
#[derive(Debug)]
pub enum Event {
    Load,
    Submit,
    NewPlayer,
    BatchLoaded(Result<Vec<Question>, FetchError>),
}

/// Work the caller must carry out after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking message.
    Alert(String),
    /// Start fetching the next batch.
    FetchBatch,
}

/// Quiz controller. `C` stores the cookie jar, `L` the score ledger.
pub struct App<C, L> {
    cookies: CookieJar<C>,
    ledger: ScoreLedger<L>,
    player: PlayerState,
    name_input: String,
    focus: Focus,
    loading: bool,
    sheet: QuestionSheet,
    key: AnswerKey,
    selections: Selections,
    current_question: usize,
    scores: Vec<ScoreEntry>,
}

impl<C: Storage, L: Storage> App<C, L> {
    pub fn new(cookies: C, ledger: L) -> Self {
        Self {
            cookies: CookieJar::new(cookies),
            ledger: ScoreLedger::new(ledger),
            player: PlayerState::NeedsName,
            name_input: String::new(),
            focus: Focus::Name,
            loading: false,
            sheet: QuestionSheet::default(),
            key: AnswerKey::default(),
            selections: Selections::default(),
            current_question: 0,
            scores: Vec::new(),
        }
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Load => self.load(),
            Event::Submit => self.submit(),
            Event::NewPlayer => {
                self.new_player();
                Vec::new()
            }
            Event::BatchLoaded(result) => {
                self.batch_loaded(result);
                Vec::new()
            }
        }
    }

    fn load(&mut self) -> Vec<Effect> {
        self.check_username();
        self.show_loading(true);
        self.display_scores();
        vec![Effect::FetchBatch]
    }

    fn submit(&mut self) -> Vec<Effect> {
        let stored = self.cookies.get(USERNAME_COOKIE);

        let username = if stored.is_empty() {
            let typed = self.name_input.trim().to_string();
            if typed.is_empty() {
                return vec![Effect::Alert(BLANK_NAME_ALERT.to_string())];
            }
            self.cookies.set(USERNAME_COOKIE, &typed, DEFAULT_COOKIE_DAYS);
            typed
        } else {
            stored
        };

        let score = quiz::score(&self.key, &self.selections);
        self.ledger.append(&username, score);
        self.display_scores();

        self.show_loading(true);
        vec![
            Effect::Alert(format!("Your score: {}", score)),
            Effect::FetchBatch,
        ]
    }

    fn new_player(&mut self) {
        self.cookies.delete(USERNAME_COOKIE);
        self.name_input.clear();
        self.check_username();
        tracing::info!("Identity cleared");
    }

    fn batch_loaded(&mut self, result: Result<Vec<Question>, FetchError>) {
        match result {
            Ok(questions) => {
                tracing::debug!("Rendering {} questions", questions.len());
                self.display_questions(&questions);
            }
            Err(err) => tracing::error!("Failed to fetch questions: {}", err),
        }
        self.show_loading(false);
    }

    /// Re-derive the player state from the identity cookie.
    pub fn check_username(&mut self) {
        let username = self.cookies.get(USERNAME_COOKIE);

        if username.is_empty() {
            self.player = PlayerState::NeedsName;
            self.focus = Focus::Name;
        } else {
            self.name_input = username.clone();
            self.player = PlayerState::Identified(username);
            self.focus = Focus::Questions;
        }
    }

    fn show_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn display_questions(&mut self, questions: &[Question]) {
        let (sheet, key) = quiz::render(questions, &mut rand::rng());
        self.sheet = sheet;
        self.key = key;
        self.selections.clear();
        self.current_question = 0;
    }

    fn display_scores(&mut self) {
        self.scores = self.ledger.entries();
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn name_input_visible(&self) -> bool {
        self.player == PlayerState::NeedsName
    }

    pub fn new_player_visible(&self) -> bool {
        !self.name_input_visible()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn questions_visible(&self) -> bool {
        !self.loading
    }

    pub fn sheet(&self) -> &QuestionSheet {
        &self.sheet
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.key
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    pub fn cookies(&self) -> &CookieJar<C> {
        &self.cookies
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Name => Focus::Questions,
            Focus::Questions if self.name_input_visible() => Focus::Name,
            Focus::Questions => Focus::Questions,
        };
    }

    pub fn name_input_push(&mut self, c: char) {
        if !c.is_control() {
            self.name_input.push(c);
        }
    }

    pub fn name_input_pop(&mut self) {
        self.name_input.pop();
    }

    pub fn select_next_question(&mut self) {
        if !self.sheet.is_empty() {
            self.current_question = (self.current_question + 1) % self.sheet.len();
        }
    }

    pub fn select_previous_question(&mut self) {
        let len = self.sheet.len();
        if len > 0 {
            self.current_question = (self.current_question + len - 1) % len;
        }
    }

    /// Check `option` in the radio group of the highlighted question.
    pub fn check_option(&mut self, option: usize) {
        if self.questions_visible()
            && option < OPTIONS_PER_QUESTION
            && self.current_question < self.sheet.len()
        {
            self.selections.check(self.current_question, option);
        }
    }

    /// Move the check mark of the highlighted question one option along.
    pub fn cycle_option(&mut self) {
        let next = self
            .selections
            .checked(self.current_question)
            .map_or(0, |option| (option + 1) % OPTIONS_PER_QUESTION);
        self.check_option(next);
    }
}
