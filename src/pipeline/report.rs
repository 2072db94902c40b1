use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::extraction::types::{ExtractionMethod, HealthSignals};
use super::recommendation::types::Recommendation;
use super::scoring::RiskProfile;

/// Reason attached to every incomplete-profile report.
pub const INCOMPLETE_PROFILE_REASON: &str = "Unable to extract sufficient health signals";

/// Audit snapshot embedded in every complete report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTrace {
    pub run_id: Uuid,
    pub extracted_via: ExtractionMethod,
    pub generated_at: DateTime<Utc>,
    pub data: HealthSignals,
    pub risk: RiskProfile,
    pub recommendations: Vec<Recommendation>,
}

/// Final output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthReport {
    Complete {
        normalized_data: HealthSignals,
        risk_profile: RiskProfile,
        recommendations: Vec<Recommendation>,
        raw_output: RunTrace,
    },
    IncompleteProfile {
        reason: String,
    },
}

impl HealthReport {
    /// The designed terminal outcome for submissions the extractor cannot
    /// populate far enough. Not a fault.
    pub fn incomplete() -> Self {
        Self::IncompleteProfile {
            reason: INCOMPLETE_PROFILE_REASON.to_string(),
        }
    }

    /// Assemble a complete report, stamping the trace at assembly time.
    pub fn complete(
        signals: HealthSignals,
        risk: RiskProfile,
        recommendations: Vec<Recommendation>,
        method: ExtractionMethod,
    ) -> Self {
        let raw_output = RunTrace {
            run_id: Uuid::new_v4(),
            extracted_via: method,
            generated_at: Utc::now(),
            data: signals.clone(),
            risk: risk.clone(),
            recommendations: recommendations.clone(),
        };

        Self::Complete {
            normalized_data: signals,
            risk_profile: risk,
            recommendations,
            raw_output,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}
