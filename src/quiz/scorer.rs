use super::{group_name, AnswerKey, Selections};

/// Groups `answer0` through `answer9` are the only ones counted.
pub const MAX_SCORED_QUESTIONS: usize = 10;

/// Count checked options that the key marks correct.
pub fn score(key: &AnswerKey, selections: &Selections) -> u32 {
    let mut score = 0;

    for index in 0..MAX_SCORED_QUESTIONS {
        let Some(option) = selections.checked(index) else {
            continue;
        };

        if key.is_correct(index, option) {
            score += 1;
        } else {
            tracing::trace!("{} answered incorrectly", group_name(index));
        }
    }

    score
}
