use serde::{Deserialize, Serialize};

/// Severity band over the summed risk score. Serialized capitalized, the
/// way reports display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a raw score. Thresholds are exclusive lower bounds:
    /// exactly 70 is Medium, exactly 35 is Low.
    pub fn from_score(score: u32) -> Self {
        if score > super::rules::HIGH_RISK_THRESHOLD {
            Self::High
        } else if score > super::rules::ELEVATED_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived risk assessment for one lifestyle record.
///
/// The score is the raw rule sum: unbounded by construction (at most 83
/// with the current table) and deliberately not normalized, even where a
/// frontend renders it against 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub score: u32,
    pub level: RiskLevel,
    /// Human-readable labels of the triggered rules, in evaluation order.
    pub factors: Vec<String>,
}
