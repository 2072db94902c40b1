use std::sync::Arc;

use super::parser::parse_recommendation_response;
use super::prompt::{build_recommendation_prompt, RECOMMENDATION_SYSTEM_PROMPT};
use super::types::Recommendation;
use super::RecommendationError;
use crate::ollama::LlmClient;
use crate::pipeline::extraction::types::HealthSignals;
use crate::pipeline::scoring::RiskProfile;

/// Asks the model for wellness suggestions grounded in one record and its
/// risk profile. Callers are expected to treat failure as "no suggestions",
/// not as a pipeline fault.
pub struct RecommendationGenerator {
    llm: Arc<dyn LlmClient + Send + Sync>,
    model: String,
}

impl RecommendationGenerator {
    pub fn new(llm: Arc<dyn LlmClient + Send + Sync>, model: &str) -> Self {
        Self {
            llm,
            model: model.to_string(),
        }
    }

    pub fn generate(
        &self,
        signals: &HealthSignals,
        risk: &RiskProfile,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        let _span = tracing::info_span!("generate_recommendations", model = %self.model).entered();

        let prompt = build_recommendation_prompt(signals, risk)?;
        let response = self
            .llm
            .generate(&self.model, &prompt, RECOMMENDATION_SYSTEM_PROMPT)?;

        let recommendations = parse_recommendation_response(&response)?;
        tracing::debug!(count = recommendations.len(), "Recommendations parsed");
        Ok(recommendations)
    }
}
