//! Where trivia questions come from.

mod opentdb;

use std::future::Future;

use crate::models::Question;

pub use opentdb::{parse_response, OpenTdbSource, DEFAULT_API_URL};

/// Number of questions requested per batch.
pub const BATCH_SIZE: usize = 10;

/// Errors that end a fetch without a usable batch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("question source answered with response code {0}")]
    ResponseCode(u8),

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not decode field {field}: {reason}")]
    Decode { field: &'static str, reason: String },

    #[error("question {index} has {count} incorrect answers, expected 3")]
    Shape { index: usize, count: usize },

    #[error("question source returned no questions")]
    Empty,
}

/// Anything able to produce a batch of questions.
pub trait QuestionSource: Send + Sync {
    fn fetch_batch(&self) -> impl Future<Output = Result<Vec<Question>, FetchError>> + Send;
}
