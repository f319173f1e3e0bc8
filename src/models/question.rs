use serde::{Deserialize, Serialize};

/// A multiple-choice trivia question as delivered by the question source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: [String; 3],
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: [&str; 3],
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.map(String::from),
            category: None,
            difficulty: None,
        }
    }
}
