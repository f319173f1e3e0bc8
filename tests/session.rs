use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use trivia_night::{
    App, FetchError, Focus, MemoryStorage, PlayerState, Question, QuestionSource, ScoreEntry,
    Session, BLANK_NAME_ALERT,
};

struct FakeSource {
    questions: Vec<Question>,
}

impl QuestionSource for FakeSource {
    async fn fetch_batch(&self) -> Result<Vec<Question>, FetchError> {
        Ok(self.questions.clone())
    }
}

struct DownSource;

impl QuestionSource for DownSource {
    async fn fetch_batch(&self) -> Result<Vec<Question>, FetchError> {
        Err(FetchError::ResponseCode(5))
    }
}

fn planets() -> Vec<Question> {
    vec![
        Question::new("Red planet?", "Mars", ["Venus", "Jupiter", "Saturn"]),
        Question::new("Ringed giant?", "Saturn", ["Mercury", "Mars", "Earth"]),
        Question::new("Largest planet?", "Jupiter", ["Neptune", "Venus", "Mars"]),
    ]
}

fn press(
    session: &mut Session<MemoryStorage, MemoryStorage, impl QuestionSource + 'static>,
    code: KeyCode,
) -> bool {
    session.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

async fn started<S: QuestionSource + 'static>(
    source: S,
) -> Session<MemoryStorage, MemoryStorage, S> {
    let app = App::new(MemoryStorage::new(), MemoryStorage::new());
    let mut session = Session::new(app, source);
    session.start();
    session.wait_for_batch().await;
    session
}

#[tokio::test]
async fn test_load_fetches_and_renders() {
    let session = started(FakeSource { questions: planets() }).await;

    assert!(session.app().questions_visible());
    assert_eq!(session.app().sheet().len(), 3);
    assert_eq!(session.app().focus(), Focus::Name);
    assert_eq!(session.alert(), None);
}

#[tokio::test]
async fn test_play_a_round_with_keys() {
    let mut session = started(FakeSource { questions: planets() }).await;

    for c in "bob".chars() {
        press(&mut session, KeyCode::Char(c));
    }
    press(&mut session, KeyCode::Tab);
    assert_eq!(session.app().focus(), Focus::Questions);

    for index in 0..3 {
        let correct = session.app().answer_key().correct_option(index).unwrap();
        let option = if index == 2 { (correct + 1) % 4 } else { correct };
        let digit = char::from_digit(option as u32 + 1, 10).unwrap();
        press(&mut session, KeyCode::Char(digit));
        press(&mut session, KeyCode::Char('j'));
    }

    assert!(!press(&mut session, KeyCode::Enter));
    assert_eq!(session.alert(), Some("Your score: 2"));
    assert_eq!(session.app().scores(), &[ScoreEntry::new("bob", 2)]);
    assert!(session.app().is_loading());

    session.wait_for_batch().await;
    assert!(!session.app().is_loading());
    assert_eq!(session.app().selections().answered(), 0);
}

#[tokio::test]
async fn test_alert_blocks_until_dismissed() {
    let mut session = started(FakeSource { questions: planets() }).await;

    press(&mut session, KeyCode::Enter);
    assert_eq!(session.alert(), Some(BLANK_NAME_ALERT));

    press(&mut session, KeyCode::Char('x'));
    assert_eq!(session.alert(), Some(BLANK_NAME_ALERT));
    assert_eq!(session.app().name_input(), "");

    press(&mut session, KeyCode::Enter);
    assert_eq!(session.alert(), None);
    assert!(session.app().scores().is_empty());
}

#[tokio::test]
async fn test_space_cycles_the_checked_option() {
    let mut session = started(FakeSource { questions: planets() }).await;
    press(&mut session, KeyCode::Tab);

    press(&mut session, KeyCode::Char(' '));
    assert_eq!(session.app().selections().checked(0), Some(0));
    press(&mut session, KeyCode::Char(' '));
    assert_eq!(session.app().selections().checked(0), Some(1));

    press(&mut session, KeyCode::Char('4'));
    press(&mut session, KeyCode::Char(' '));
    assert_eq!(session.app().selections().checked(0), Some(0));
}

#[tokio::test]
async fn test_new_player_key_only_when_identified() {
    let mut session = started(FakeSource { questions: planets() }).await;
    press(&mut session, KeyCode::Tab);

    press(&mut session, KeyCode::Char('n'));
    assert_eq!(session.app().player(), &PlayerState::NeedsName);
    assert_eq!(session.app().focus(), Focus::Questions);

    press(&mut session, KeyCode::Tab);
    for c in "ivy".chars() {
        press(&mut session, KeyCode::Char(c));
    }
    press(&mut session, KeyCode::Enter);
    press(&mut session, KeyCode::Enter);
    session.wait_for_batch().await;

    let restarted = {
        let app = App::new(
            session.app().cookies().storage().clone(),
            MemoryStorage::new(),
        );
        let mut next = Session::new(app, FakeSource { questions: planets() });
        next.start();
        next
    };
    assert_eq!(
        restarted.app().player(),
        &PlayerState::Identified("ivy".to_string())
    );

    let mut restarted = restarted;
    restarted.wait_for_batch().await;
    press(&mut restarted, KeyCode::Char('n'));
    assert_eq!(restarted.app().player(), &PlayerState::NeedsName);
    assert_eq!(restarted.app().focus(), Focus::Name);
}

#[tokio::test]
async fn test_failed_fetch_hides_loader() {
    let session = started(DownSource).await;

    assert!(!session.app().is_loading());
    assert!(session.app().sheet().is_empty());
    assert_eq!(session.alert(), None);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut session = started(FakeSource { questions: planets() }).await;
    assert!(press(&mut session, KeyCode::Esc));

    press(&mut session, KeyCode::Tab);
    assert!(press(&mut session, KeyCode::Char('q')));
    assert!(session.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}
