use crate::pipeline::extraction::types::HealthSignals;
use crate::pipeline::scoring::RiskProfile;

pub const RECOMMENDATION_SYSTEM_PROMPT: &str = r#"
You are a health informatics assistant. You give ONLY general wellness
advice: no diagnosis, no medication, no treatment plans.

RULES - ABSOLUTE, NO EXCEPTIONS:
1. Base every suggestion on the respondent data and risk factors provided.
2. Keep advice actionable and specific to one lifestyle area each.
3. Output a single JSON array and nothing else. No prose, no markdown.
"#;

/// Build the recommendation prompt from the record and its risk profile.
pub fn build_recommendation_prompt(
    signals: &HealthSignals,
    risk: &RiskProfile,
) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string_pretty(signals)?;

    Ok(format!(
        r#"Respondent data:
{data}

Risk assessment:
Score {score}/100
Level {level}
Factors: {factors}

Return exactly 3 wellness recommendations as a JSON array:

[
  {{"area": "string", "advice": "string", "priority": "High" | "Medium" | "Low"}}
]
"#,
        score = risk.score,
        level = risk.level,
        factors = risk.factors.join(", "),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::scoring::score_signals;
    use crate::pipeline::extraction::types::{DietPattern, ExerciseHabit};

    #[test]
    fn prompt_embeds_data_and_risk() {
        let signals = HealthSignals {
            age: Some(42),
            smoker: Some(true),
            exercise: Some(ExerciseHabit::Rarely),
            diet: Some(DietPattern::HighSugar),
        };
        let risk = score_signals(&signals);
        let prompt = build_recommendation_prompt(&signals, &risk).unwrap();

        assert!(prompt.contains("\"age\": 42"));
        assert!(prompt.contains("Score 83/100"));
        assert!(prompt.contains("Level High"));
        assert!(prompt.contains("Smoking, Low Physical Activity"));
        assert!(prompt.contains("exactly 3"));
    }

    #[test]
    fn system_prompt_forbids_diagnosis() {
        assert!(RECOMMENDATION_SYSTEM_PROMPT.contains("no diagnosis"));
        assert!(RECOMMENDATION_SYSTEM_PROMPT.contains("no medication"));
    }
}
