pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod rules;
pub mod sanitize;
pub mod types;

pub use orchestrator::{SignalExtractor, MIN_SIGNAL_FIELDS};
pub use types::*;

use thiserror::Error;

use crate::ollama::LlmError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Malformed extraction response: {0}")]
    MalformedResponse(String),
}
