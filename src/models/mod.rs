mod question;
mod score;

pub use question::Question;
pub use score::ScoreEntry;

/// Whether the player still has to type a name before submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerState {
    /// No identity cookie.
    NeedsName,
    /// Identity cookie present.
    Identified(String),
}

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Questions,
}
