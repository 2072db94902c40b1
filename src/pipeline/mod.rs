pub mod extraction;
pub mod processor;
pub mod recommendation;
pub mod report;
pub mod scoring;
pub mod vision;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phases observed by the caller over one pipeline run.
///
/// `Extracting` only appears when the semantic fallback is actually
/// invoked; `Error` is emitted by the caller's boundary, never by
/// [`processor::SurveyPipeline::run`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    Idle,
    Parsing,
    Extracting,
    Scoring,
    Recommending,
    Completed,
    Error,
}

impl PipelinePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Parsing => "parsing",
            Self::Extracting => "extracting",
            Self::Scoring => "scoring",
            Self::Recommending => "recommending",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that escape a pipeline run.
///
/// Remote-collaborator failures in extraction and recommendation degrade
/// in place and never surface here; only the vision front-end can fail the
/// run as a whole.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Image input requires a configured vision reader")]
    VisionUnavailable,

    #[error(transparent)]
    Ocr(#[from] vision::OcrError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_as_str_is_lowercase() {
        assert_eq!(PipelinePhase::Idle.as_str(), "idle");
        assert_eq!(PipelinePhase::Parsing.as_str(), "parsing");
        assert_eq!(PipelinePhase::Extracting.as_str(), "extracting");
        assert_eq!(PipelinePhase::Scoring.as_str(), "scoring");
        assert_eq!(PipelinePhase::Recommending.as_str(), "recommending");
        assert_eq!(PipelinePhase::Completed.as_str(), "completed");
        assert_eq!(PipelinePhase::Error.as_str(), "error");
    }

    #[test]
    fn phase_serde_roundtrip() {
        let json = serde_json::to_string(&PipelinePhase::Recommending).unwrap();
        assert_eq!(json, "\"recommending\"");
        let parsed: PipelinePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PipelinePhase::Recommending);
    }

    #[test]
    fn phase_display_matches_as_str() {
        assert_eq!(PipelinePhase::Completed.to_string(), "completed");
    }
}
