use serde::{Deserialize, Serialize};

/// One row of the score ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(username: impl Into<String>, score: u32) -> Self {
        Self {
            username: username.into(),
            score,
        }
    }
}
