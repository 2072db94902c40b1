pub mod generator;
pub mod parser;
pub mod prompt;
pub mod types;

pub use generator::RecommendationGenerator;
pub use types::{Priority, Recommendation, MAX_RECOMMENDATIONS};

use thiserror::Error;

use crate::ollama::LlmError;

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Malformed recommendation response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
