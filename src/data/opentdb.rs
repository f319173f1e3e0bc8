//! Client for the Open Trivia Database.
//!
//! Questions are requested with `encode=base64` so every text field arrives
//! free of HTML entities once decoded.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::models::Question;

use super::{FetchError, QuestionSource, BATCH_SIZE};

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

pub struct OpenTdbSource {
    api_url: String,
    client: reqwest::Client,
}

impl OpenTdbSource {
    pub fn new(api_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("trivia-night/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api_url: api_url.into(),
            client,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl QuestionSource for OpenTdbSource {
    async fn fetch_batch(&self) -> Result<Vec<Question>, FetchError> {
        let amount = BATCH_SIZE.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("amount", amount.as_str()),
                ("type", "multiple"),
                ("encode", "base64"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let raw: RawResponse = response.json().await?;
        decode_response(raw)
    }
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

/// Parse a base64-encoded `api.php` response body into questions.
pub fn parse_response(body: &str) -> Result<Vec<Question>, FetchError> {
    decode_response(serde_json::from_str(body)?)
}

fn decode_response(raw: RawResponse) -> Result<Vec<Question>, FetchError> {
    if raw.response_code != 0 {
        return Err(FetchError::ResponseCode(raw.response_code));
    }
    if raw.results.is_empty() {
        return Err(FetchError::Empty);
    }

    raw.results
        .into_iter()
        .enumerate()
        .map(|(index, question)| decode_question(index, question))
        .collect()
}

fn decode_question(index: usize, raw: RawQuestion) -> Result<Question, FetchError> {
    let count = raw.incorrect_answers.len();
    let incorrect: [String; 3] = raw
        .incorrect_answers
        .into_iter()
        .map(|answer| decode(&answer, "incorrect_answers"))
        .collect::<Result<Vec<_>, _>>()?
        .try_into()
        .map_err(|_| FetchError::Shape { index, count })?;

    Ok(Question {
        text: decode(&raw.question, "question")?,
        correct_answer: decode(&raw.correct_answer, "correct_answer")?,
        incorrect_answers: incorrect,
        category: raw
            .category
            .map(|c| decode(&c, "category"))
            .transpose()?,
        difficulty: raw
            .difficulty
            .map(|d| decode(&d, "difficulty"))
            .transpose()?,
    })
}

fn decode(value: &str, field: &'static str) -> Result<String, FetchError> {
    let bytes = STANDARD.decode(value).map_err(|e| FetchError::Decode {
        field,
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| FetchError::Decode {
        field,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARS: &str = r#"{
        "response_code": 0,
        "results": [{
            "type": "bXVsdGlwbGU=",
            "difficulty": "ZWFzeQ==",
            "category": "U2NpZW5jZSAmIE5hdHVyZQ==",
            "question": "V2hpY2ggcGxhbmV0IGlzIGtub3duIGFzIHRoZSBSZWQgUGxhbmV0Pw==",
            "correct_answer": "TWFycw==",
            "incorrect_answers": ["VmVudXM=", "SnVwaXRlcg==", "U2F0dXJu"]
        }]
    }"#;

    #[test]
    fn test_parse_decodes_base64_fields() {
        let questions = parse_response(MARS).unwrap();
        assert_eq!(questions.len(), 1);

        let question = &questions[0];
        assert_eq!(question.text, "Which planet is known as the Red Planet?");
        assert_eq!(question.correct_answer, "Mars");
        assert_eq!(question.incorrect_answers, ["Venus", "Jupiter", "Saturn"]);
        assert_eq!(question.category.as_deref(), Some("Science & Nature"));
        assert_eq!(question.difficulty.as_deref(), Some("easy"));
    }

    #[test]
    fn test_parse_rejects_nonzero_response_code() {
        let body = r#"{"response_code": 5, "results": []}"#;
        assert!(matches!(
            parse_response(body),
            Err(FetchError::ResponseCode(5))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_results() {
        let body = r#"{"response_code": 0, "results": []}"#;
        assert!(matches!(parse_response(body), Err(FetchError::Empty)));
    }

    #[test]
    fn test_parse_rejects_wrong_answer_count() {
        let body = r#"{"response_code": 0, "results": [{
            "question": "T25seSB0d28=",
            "correct_answer": "QQ==",
            "incorrect_answers": ["Qg=="]
        }]}"#;
        assert!(matches!(
            parse_response(body),
            Err(FetchError::Shape { index: 0, count: 1 })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let body = r#"{"response_code": 0, "results": [{
            "question": "not base64!",
            "correct_answer": "QQ==",
            "incorrect_answers": ["Qg==", "Qg==", "Qg=="]
        }]}"#;
        assert!(matches!(
            parse_response(body),
            Err(FetchError::Decode { field: "question", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_response("<html>"), Err(FetchError::Parse(_))));
    }
}
