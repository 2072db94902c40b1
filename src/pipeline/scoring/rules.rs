//! Lifestyle risk rules.
//!
//! The table is data, not a branch ladder: each rule pairs a predicate
//! with its weight and display label, evaluated independently and
//! additively. Absent fields trigger nothing, so scoring is total over
//! any record.

use super::types::{RiskLevel, RiskProfile};
use crate::pipeline::extraction::types::{DietPattern, ExerciseHabit, HealthSignals};

/// Scores above this are High risk (exclusive).
pub const HIGH_RISK_THRESHOLD: u32 = 70;

/// Scores above this are Medium risk (exclusive).
pub const ELEVATED_RISK_THRESHOLD: u32 = 35;

/// A single additive risk rule.
pub struct RiskRule {
    pub label: &'static str,
    pub weight: u32,
    pub applies: fn(&HealthSignals) -> bool,
}

fn is_smoker(signals: &HealthSignals) -> bool {
    signals.smoker == Some(true)
}

fn rarely_exercises(signals: &HealthSignals) -> bool {
    signals.exercise == Some(ExerciseHabit::Rarely)
}

fn high_sugar_diet(signals: &HealthSignals) -> bool {
    signals.diet == Some(DietPattern::HighSugar)
}

fn over_fifty(signals: &HealthSignals) -> bool {
    signals.age.is_some_and(|age| age > 50)
}

/// Rule table. Order here is also the factor emission order.
pub const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        label: "Smoking",
        weight: 40,
        applies: is_smoker,
    },
    RiskRule {
        label: "Low Physical Activity",
        weight: 20,
        applies: rarely_exercises,
    },
    RiskRule {
        label: "High Sugar Diet",
        weight: 18,
        applies: high_sugar_diet,
    },
    RiskRule {
        label: "Age > 50",
        weight: 5,
        applies: over_fifty,
    },
];

/// Score one record. Pure and deterministic: equal records always yield
/// identical profiles, factor order included.
pub fn score_signals(signals: &HealthSignals) -> RiskProfile {
    let mut score = 0;
    let mut factors = Vec::new();

    for rule in RISK_RULES {
        if (rule.applies)(signals) {
            score += rule.weight;
            factors.push(rule.label.to_string());
        }
    }

    RiskProfile {
        score,
        level: RiskLevel::from_score(score),
        factors,
    }
}
