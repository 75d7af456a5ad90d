//! Wire types for the survey store.
//!
//! Shapes mirror the REST contract exactly: dates travel as `YYYY-MM-DD`
//! strings, `liked_most` as an array of option tokens, `raffle` as an
//! array of integers (never as the delimited text the form shows while
//! editing).

use serde::{Deserialize, Serialize};

/// A persisted survey as returned by the store. Always carries the
/// server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SurveyRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub telephone: String,
    pub email: String,
    /// ISO-8601 date, `YYYY-MM-DD`.
    pub survey_date: String,
    /// Campus option tokens: `students`, `location`, `campus`,
    /// `atmosphere`, `dormRooms`, `sports`.
    #[serde(default)]
    pub liked_most: Vec<String>,
    /// `friends`, `television`, `internet`, `other`, or empty.
    #[serde(default)]
    pub interest_source: String,
    /// `veryLikely`, `likely`, or `unlikely`.
    #[serde(default)]
    pub recommendation: String,
    /// Raffle entries, each in 1..=100. Order and repetition are
    /// preserved exactly as entered.
    #[serde(default)]
    pub raffle: Vec<u32>,
    #[serde(default)]
    pub comments: String,
}

/// Request body for `POST`/`PUT`: a survey without its identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyPayload {
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub telephone: String,
    pub email: String,
    pub survey_date: String,
    pub liked_most: Vec<String>,
    pub interest_source: String,
    pub recommendation: String,
    pub raffle: Vec<u32>,
    pub comments: String,
}

/// Result of a list call. A degraded outcome means the store answered
/// with a server error and the caller should present an empty collection
/// with a friendly message rather than fail.
#[derive(Debug, Clone, Default)]
pub struct ListOutcome {
    pub surveys: Vec<SurveyRecord>,
    pub degraded: bool,
}
