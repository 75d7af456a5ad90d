//! Survey Platform Rust SDK
//!
//! Async client for the student survey store. Wraps the REST contract
//! (`/api/surveys/`) with typed records, classified failures, and a
//! bounded list call that degrades on server errors instead of failing.
//!
//! # Example
//!
//! ```rust,no_run
//! use survey_sdk::{Result, SurveyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SurveyClient::new("http://localhost:8000");
//!
//!     let outcome = client.list().await?;
//!     for survey in &outcome.surveys {
//!         println!("{} {} ({})", survey.first_name, survey.last_name, survey.survey_date);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{SurveyClient, SurveyConfig, DEFAULT_BASE_URL, LIST_TIMEOUT};
pub use error::ApiError;
pub use types::{ListOutcome, SurveyPayload, SurveyRecord};

/// Result type alias for survey store operations
pub type Result<T> = std::result::Result<T, ApiError>;
