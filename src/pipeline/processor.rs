//! Full survey pipeline: parse, extract, score, recommend, report.
//!
//! One sequential pass per submission with no shared state between runs.
//! Remote-collaborator failures degrade in place; the vision front-end is
//! the only seam whose failure ends the run with an error.

use std::sync::Arc;

use super::extraction::orchestrator::{SignalExtractor, MIN_SIGNAL_FIELDS};
use super::extraction::types::RawInput;
use super::recommendation::generator::RecommendationGenerator;
use super::report::HealthReport;
use super::scoring::score_signals;
use super::vision::SurveyImageReader;
use super::{PipelineError, PipelinePhase};
use crate::config::PipelineSettings;
use crate::ollama::LlmClient;

pub struct SurveyPipeline {
    extractor: SignalExtractor,
    recommender: RecommendationGenerator,
    vision: Option<SurveyImageReader>,
}

impl SurveyPipeline {
    /// Pipeline over one text-generation client. Image input additionally
    /// needs [`with_vision`](Self::with_vision).
    pub fn new(llm: Arc<dyn LlmClient + Send + Sync>, settings: &PipelineSettings) -> Self {
        Self {
            extractor: SignalExtractor::new(llm.clone(), &settings.text_model),
            recommender: RecommendationGenerator::new(llm, &settings.text_model),
            vision: None,
        }
    }

    pub fn with_vision(mut self, vision: SurveyImageReader) -> Self {
        self.vision = Some(vision);
        self
    }

    /// Run the pipeline over one submission.
    ///
    /// `on_phase` is invoked synchronously at each phase boundary;
    /// `Extracting` only appears when the semantic fallback runs, and
    /// nothing past `Parsing`/`Extracting` is emitted for an
    /// insufficiently populated record.
    pub fn run(
        &self,
        input: &RawInput,
        on_phase: impl Fn(PipelinePhase),
    ) -> Result<HealthReport, PipelineError> {
        on_phase(PipelinePhase::Parsing);

        let resolved;
        let input = match input {
            RawInput::Image { bytes, mime } => {
                let reader = self.vision.as_ref().ok_or(PipelineError::VisionUnavailable)?;
                let text = reader.read_survey_image(bytes, mime)?;
                resolved = RawInput::from_text(&text);
                &resolved
            }
            other => other,
        };

        let outcome = self
            .extractor
            .extract_with_hook(input, || on_phase(PipelinePhase::Extracting));

        if outcome.signals.populated_fields() < MIN_SIGNAL_FIELDS {
            tracing::info!(
                populated = outcome.signals.populated_fields(),
                "Profile incomplete after extraction"
            );
            return Ok(HealthReport::incomplete());
        }

        on_phase(PipelinePhase::Scoring);
        let risk = score_signals(&outcome.signals);

        on_phase(PipelinePhase::Recommending);
        let recommendations = match self.recommender.generate(&outcome.signals, &risk) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation step failed, continuing without suggestions");
                Vec::new()
            }
        };

        on_phase(PipelinePhase::Completed);
        tracing::info!(
            score = risk.score,
            level = %risk.level,
            recommendations = recommendations.len(),
            "Survey pipeline completed"
        );

        Ok(HealthReport::complete(
            outcome.signals,
            risk,
            recommendations,
            outcome.method,
        ))
    }
}
