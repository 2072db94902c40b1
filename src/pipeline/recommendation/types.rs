use serde::{Deserialize, Serialize};

/// Advice items kept per report.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// How urgently a suggestion should be acted on. Serialized capitalized,
/// matching the report surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One AI-generated wellness suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Lifestyle area the advice addresses (e.g. "Diet").
    pub area: String,
    pub advice: String,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        let parsed: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn recommendation_serde_roundtrip() {
        let rec = Recommendation {
            area: "Exercise".into(),
            advice: "Take a 30-minute walk most days.".into(),
            priority: Priority::Medium,
        };
        let json = serde_json::to_string(&rec).unwrap();
        let parsed: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }
}
