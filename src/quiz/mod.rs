//! Turning a batch of questions into something answerable, and scoring it.

mod render;
mod scorer;

pub use render::{
    group_name, render, sanitize, AnswerKey, QuestionSheet, RenderedOption, RenderedQuestion,
    Selections, OPTIONS_PER_QUESTION,
};
pub use scorer::{score, MAX_SCORED_QUESTIONS};
