use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

pub const OPTIONS_PER_QUESTION: usize = 4;

/// Name of the radio group for the question at `index`.
pub fn group_name(index: usize) -> String {
    format!("answer{}", index)
}

/// One question as shown to the player, options already shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuestion {
    pub group: String,
    pub text: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// An option together with its correctness marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub label: String,
    pub is_correct: bool,
}

/// The questions currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSheet {
    questions: Vec<RenderedQuestion>,
}

impl QuestionSheet {
    pub fn questions(&self) -> &[RenderedQuestion] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&RenderedQuestion> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Position of the correct option for each rendered question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    correct: Vec<usize>,
}

impl AnswerKey {
    pub fn correct_option(&self, question: usize) -> Option<usize> {
        self.correct.get(question).copied()
    }

    pub fn is_correct(&self, question: usize, option: usize) -> bool {
        self.correct_option(question) == Some(option)
    }

    /// Options of `question` paired with their markers.
    pub fn options(&self, sheet: &QuestionSheet, question: usize) -> Vec<RenderedOption> {
        let Some(rendered) = sheet.get(question) else {
            return Vec::new();
        };

        rendered
            .options
            .iter()
            .enumerate()
            .map(|(option, label)| RenderedOption {
                label: label.clone(),
                is_correct: self.is_correct(question, option),
            })
            .collect()
    }
}

/// Checked option per question. At most one per radio group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    checked: BTreeMap<usize, usize>,
}

impl Selections {
    pub fn check(&mut self, question: usize, option: usize) {
        self.checked.insert(question, option);
    }

    pub fn checked(&self, question: usize) -> Option<usize> {
        self.checked.get(&question).copied()
    }

    pub fn answered(&self) -> usize {
        self.checked.len()
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }
}

/// Build a fresh sheet and answer key from a batch.
pub fn render<R: Rng + ?Sized>(questions: &[Question], rng: &mut R) -> (QuestionSheet, AnswerKey) {
    let mut sheet = QuestionSheet::default();
    let mut key = AnswerKey::default();

    for (index, question) in questions.iter().enumerate() {
        let mut order: [usize; OPTIONS_PER_QUESTION] = [0, 1, 2, 3];
        order.shuffle(rng);

        let options = order.map(|slot| match slot {
            0 => sanitize(&question.correct_answer),
            n => sanitize(&question.incorrect_answers[n - 1]),
        });
        let correct = order.iter().position(|&slot| slot == 0).unwrap_or(0);

        sheet.questions.push(RenderedQuestion {
            group: group_name(index),
            text: sanitize(&question.text),
            category: question.category.as_deref().map(sanitize),
            difficulty: question.difficulty.as_deref().map(sanitize),
            options,
        });
        key.correct.push(correct);
    }

    (sheet, key)
}

/// Make remote text safe to draw: control characters (escape sequences
/// included) are dropped and whitespace runs collapse to one space.
pub fn sanitize(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
