use serde::{Deserialize, Serialize};

/// One survey submission, in whatever shape the caller received it.
/// Lives only for the duration of a single pipeline run.
#[derive(Debug, Clone)]
pub enum RawInput {
    /// Pre-parsed structured payload (a filled form).
    Structured(serde_json::Value),
    /// Free-form text, possibly JSON that has not been parsed yet.
    Text(String),
    /// Photographed or scanned survey form, transcribed upstream by the
    /// vision front-end before extraction runs.
    Image { bytes: Vec<u8>, mime: String },
}

impl RawInput {
    /// Classify a text body: JSON becomes a structured input, anything
    /// else stays free text.
    pub fn from_text(body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    /// Text rendition used for the semantic-fallback prompt.
    /// Images have none; they must be transcribed first.
    pub fn raw_text(&self) -> Option<String> {
        match self {
            Self::Structured(value) => Some(value.to_string()),
            Self::Text(text) => Some(text.clone()),
            Self::Image { .. } => None,
        }
    }
}

/// Exercise frequency reported by the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseHabit {
    Rarely,
    Occasionally,
    Regularly,
}

impl ExerciseHabit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rarely => "rarely",
            Self::Occasionally => "occasionally",
            Self::Regularly => "regularly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rarely" => Some(Self::Rarely),
            "occasionally" => Some(Self::Occasionally),
            "regularly" => Some(Self::Regularly),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExerciseHabit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dietary pattern reported by the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPattern {
    #[serde(rename = "high sugar")]
    HighSugar,
    Balanced,
    Poor,
    Unknown,
}

impl DietPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighSugar => "high sugar",
            Self::Balanced => "balanced",
            Self::Poor => "poor",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high sugar" => Some(Self::HighSugar),
            "balanced" => Some(Self::Balanced),
            "poor" => Some(Self::Poor),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for DietPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical lifestyle record extracted from one submission.
///
/// Every field is independently optional; downstream stages treat absent
/// fields as contributing nothing. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoker: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseHabit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietPattern>,
}

impl HealthSignals {
    /// Number of fields actually present.
    pub fn populated_fields(&self) -> usize {
        usize::from(self.age.is_some())
            + usize::from(self.smoker.is_some())
            + usize::from(self.exercise.is_some())
            + usize::from(self.diet.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }
}

/// Which extraction phase produced the final record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    RuleBased,
    SemanticFallback,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuleBased => "rule_based",
            Self::SemanticFallback => "semantic_fallback",
        }
    }
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extraction result: the record plus the phase that produced it.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub signals: HealthSignals,
    pub method: ExtractionMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_fields_counts_present_values() {
        let empty = HealthSignals::default();
        assert_eq!(empty.populated_fields(), 0);
        assert!(empty.is_empty());

        let partial = HealthSignals {
            age: Some(30),
            ..Default::default()
        };
        assert_eq!(partial.populated_fields(), 1);

        let full = HealthSignals {
            age: Some(42),
            smoker: Some(true),
            exercise: Some(ExerciseHabit::Rarely),
            diet: Some(DietPattern::HighSugar),
        };
        assert_eq!(full.populated_fields(), 4);
    }

    #[test]
    fn diet_serde_uses_spaced_rename() {
        let json = serde_json::to_string(&DietPattern::HighSugar).unwrap();
        assert_eq!(json, "\"high sugar\"");
        let parsed: DietPattern = serde_json::from_str("\"high sugar\"").unwrap();
        assert_eq!(parsed, DietPattern::HighSugar);
    }

    #[test]
    fn exercise_roundtrip() {
        for habit in [
            ExerciseHabit::Rarely,
            ExerciseHabit::Occasionally,
            ExerciseHabit::Regularly,
        ] {
            assert_eq!(ExerciseHabit::from_str(habit.as_str()), Some(habit));
        }
        assert_eq!(ExerciseHabit::from_str("sometimes"), None);
    }

    #[test]
    fn diet_roundtrip() {
        for diet in [
            DietPattern::HighSugar,
            DietPattern::Balanced,
            DietPattern::Poor,
            DietPattern::Unknown,
        ] {
            assert_eq!(DietPattern::from_str(diet.as_str()), Some(diet));
        }
        assert_eq!(DietPattern::from_str("keto"), None);
    }

    #[test]
    fn signals_serde_skips_absent_fields() {
        let signals = HealthSignals {
            smoker: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&signals).unwrap();
        assert_eq!(json, "{\"smoker\":false}");
    }

    #[test]
    fn signals_deserialize_accepts_explicit_nulls() {
        let parsed: HealthSignals =
            serde_json::from_str(r#"{"age":null,"smoker":true,"exercise":null,"diet":null}"#)
                .unwrap();
        assert_eq!(parsed.populated_fields(), 1);
        assert_eq!(parsed.smoker, Some(true));
    }

    #[test]
    fn raw_input_from_text_detects_json() {
        assert!(matches!(
            RawInput::from_text(r#"{"age": 42}"#),
            RawInput::Structured(_)
        ));
        assert!(matches!(
            RawInput::from_text("I am 42 and I quit smoking"),
            RawInput::Text(_)
        ));
    }

    #[test]
    fn raw_text_serializes_structured_input() {
        let input = RawInput::Structured(serde_json::json!({"age": 42}));
        assert_eq!(input.raw_text().unwrap(), r#"{"age":42}"#);

        let image = RawInput::Image {
            bytes: vec![1, 2, 3],
            mime: "image/png".into(),
        };
        assert!(image.raw_text().is_none());
    }

    #[test]
    fn extraction_method_display() {
        assert_eq!(ExtractionMethod::RuleBased.to_string(), "rule_based");
        assert_eq!(
            ExtractionMethod::SemanticFallback.to_string(),
            "semantic_fallback"
        );
    }
}
