use std::sync::Arc;

use super::parser::parse_extraction_response;
use super::prompt::{build_extraction_prompt, EXTRACTION_SYSTEM_PROMPT};
use super::rules::rule_based_extract;
use super::sanitize::sanitize_for_llm;
use super::types::{ExtractionMethod, ExtractionOutcome, HealthSignals, RawInput};
use crate::ollama::LlmClient;

/// Minimum populated fields for a record to carry the rest of the pipeline.
pub const MIN_SIGNAL_FIELDS: usize = 2;

/// Two-phase signal extraction: a free deterministic parse first, a remote
/// semantic pass only when the structured parse comes up short.
pub struct SignalExtractor {
    llm: Arc<dyn LlmClient + Send + Sync>,
    model: String,
}

impl SignalExtractor {
    pub fn new(llm: Arc<dyn LlmClient + Send + Sync>, model: &str) -> Self {
        Self {
            llm,
            model: model.to_string(),
        }
    }

    /// Extract a lifestyle record from one submission.
    pub fn extract(&self, input: &RawInput) -> ExtractionOutcome {
        self.extract_with_hook(input, || {})
    }

    /// Like [`extract`](Self::extract), with a hook invoked right before
    /// the semantic fallback starts, so callers can surface the phase
    /// change while the model call is in flight.
    pub fn extract_with_hook(
        &self,
        input: &RawInput,
        on_fallback: impl FnOnce(),
    ) -> ExtractionOutcome {
        let deterministic = rule_based_extract(input);
        if deterministic.populated_fields() >= MIN_SIGNAL_FIELDS {
            return ExtractionOutcome {
                signals: deterministic,
                method: ExtractionMethod::RuleBased,
            };
        }

        let Some(text) = input.raw_text() else {
            // Images carry no text to fall back on at this layer.
            return ExtractionOutcome {
                signals: deterministic,
                method: ExtractionMethod::RuleBased,
            };
        };

        tracing::debug!(
            populated = deterministic.populated_fields(),
            "Structured parse insufficient, invoking semantic fallback"
        );
        on_fallback();

        ExtractionOutcome {
            signals: self.semantic_extract(&text),
            method: ExtractionMethod::SemanticFallback,
        }
    }

    /// Remote semantic extraction. Transport and parse failures degrade to
    /// an empty record; the caller decides what insufficiency means.
    fn semantic_extract(&self, text: &str) -> HealthSignals {
        let _span = tracing::info_span!("semantic_extract", model = %self.model).entered();

        match self.try_semantic_extract(text) {
            Ok(signals) => signals,
            Err(e) => {
                tracing::warn!(error = %e, "Semantic extraction degraded to empty record");
                HealthSignals::default()
            }
        }
    }

    fn try_semantic_extract(&self, text: &str) -> Result<HealthSignals, super::ExtractionError> {
        let sanitized = sanitize_for_llm(text);
        let prompt = build_extraction_prompt(&sanitized);
        let response = self
            .llm
            .generate(&self.model, &prompt, EXTRACTION_SYSTEM_PROMPT)?;
        parse_extraction_response(&response)
    }
}
